use super::templates::{
    EXPLANATION_NAME, EXPLANATION_TEMPLATE, IMAGE_PROMPT_NAME, IMAGE_PROMPT_TEMPLATE, REPLY_NAME,
    REPLY_TEMPLATE, REWRITE_NAME, REWRITE_TEMPLATE,
};
use tera::{Context, Tera};

/// Descriptor for a flame-up severity level. Unmapped levels yield `""`.
pub fn severity_descriptor(level: i32) -> &'static str {
    match level {
        1 => "少し配慮に欠ける表現",
        2 => "誤解を招きやすい表現",
        3 => "明確に批判されそうな表現",
        4 => "かなり問題がある表現",
        5 => "炎上確実な表現",
        _ => "",
    }
}

const DEFAULT_REPLY_INSTRUCTION: &str = "この投稿に対するリプライを生成してください。";

/// Instruction sentence for a reply archetype label, with a generic
/// fallback for labels outside the fixed set.
pub fn reply_instruction(label: &str) -> &'static str {
    match label {
        "正論で批判するタイプ" => {
            "正論を振りかざして批判する、理屈っぽいリプライを生成してください。"
        }
        "揚げ足を取るタイプ" => {
            "些細な言葉尻や表現の揚げ足を取る、細かいリプライを生成してください。"
        }
        "的外れな批判" => {
            "投稿の本質とは関係ない、的外れな批判をするリプライを生成してください。"
        }
        "過剰に擁護するタイプ" => {
            "投稿を過剰に擁護する、盲目的に賛同するリプライを生成してください。"
        }
        _ => DEFAULT_REPLY_INSTRUCTION,
    }
}

/// Renders the fixed Japanese prompt templates.
///
/// Holds only the compiled templates; every render is a pure function of
/// its arguments.
pub struct PromptBuilder {
    tera: Tera,
}

impl PromptBuilder {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (REWRITE_NAME, REWRITE_TEMPLATE),
            (EXPLANATION_NAME, EXPLANATION_TEMPLATE),
            (REPLY_NAME, REPLY_TEMPLATE),
            (IMAGE_PROMPT_NAME, IMAGE_PROMPT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Prompt asking for `original` rewritten at the given severity.
    pub fn rewrite(&self, original: &str, level: i32) -> anyhow::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("original", original);
        ctx.insert("level", &level);
        ctx.insert("descriptor", severity_descriptor(level));
        self.render(REWRITE_NAME, &ctx)
    }

    /// Prompt asking why `rewritten` provokes more than `original`.
    pub fn explanation(&self, original: &str, rewritten: &str) -> anyhow::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("original", original);
        ctx.insert("rewritten", rewritten);
        self.render(EXPLANATION_NAME, &ctx)
    }

    /// Prompt asking for one reply in the voice of `label`.
    pub fn reply(&self, text: &str, label: &str) -> anyhow::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("instruction", reply_instruction(label));
        ctx.insert("text", text);
        self.render(REPLY_NAME, &ctx)
    }

    /// Prompt asking the text model for an English image prompt.
    pub fn image_prompt(&self, text: &str) -> anyhow::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("text", text);
        self.render(IMAGE_PROMPT_NAME, &ctx)
    }

    fn render(&self, name: &str, ctx: &Context) -> anyhow::Result<String> {
        Ok(self.tera.render(name, ctx)?)
    }
}
