//! Raw Tera sources for every prompt the simulator sends.
//!
//! Only the constant scaffolding lives here; user text is always passed in
//! through the render context, never spliced into the template source.

pub(super) const REWRITE_NAME: &str = "rewrite";
pub(super) const EXPLANATION_NAME: &str = "explanation";
pub(super) const REPLY_NAME: &str = "reply";
pub(super) const IMAGE_PROMPT_NAME: &str = "image_prompt";

pub(super) const REWRITE_TEMPLATE: &str = "\
あなたは「炎上シミュレーター」です。以下の投稿を、炎上度レベル{{ level }}（1-5）で、
誤解されやすい・批判を受けやすい表現に変換してください。

【元の投稿】
{{ original }}

【変換ルール】
- レベル1: 少し配慮に欠ける表現
- レベル2: 誤解を招きやすい表現
- レベル3: 明確に批判されそうな表現
- レベル4: かなり問題がある表現
- レベル5: 炎上確実な表現

【今回のレベル】
レベル{{ level }}: {{ descriptor }}

変換後の投稿のみを出力してください。説明は不要です。";

pub(super) const EXPLANATION_TEMPLATE: &str = "\
以下の2つの投稿を比較して、なぜ変換後の投稿が炎上しやすいのか、
簡潔に説明してください（2-3文程度）。

【元の投稿】
{{ original }}

【変換後の投稿】
{{ rewritten }}

変換後の投稿が炎上しやすい理由を、具体的に指摘してください。";

pub(super) const REPLY_TEMPLATE: &str = "\
以下の投稿に対して、{{ instruction }}

【投稿】
{{ text }}

リプライ内容のみを出力してください。説明は不要です。
SNSの投稿のような口調で、簡潔に（2-3文程度）生成してください。";

pub(super) const IMAGE_PROMPT_TEMPLATE: &str = "\
以下の炎上投稿に合わせた、視覚的にインパクトのある画像のプロンプトを生成してください。

【投稿】
{{ text }}

【要件】
- 投稿の雰囲気を視覚的に表現
- 炎のモチーフを含める
- SNS映えする構図
- ミーム的な要素
- 日本のネット文化に馴染む表現

画像生成プロンプト（英語）のみを出力してください。説明は不要です。";
