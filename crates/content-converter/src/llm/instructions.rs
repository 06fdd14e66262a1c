//! Fixed instruction text wrapped around every request.
use indoc::formatdoc;

pub fn optimize_instruction(text: &str) -> String {
    formatdoc! {"
        あなたは技術記事の編集者です。以下の内容に従って文章を最適化してください。
        意味や事実関係は変えず、読みやすさと構成を改善してください。
        出力はマークダウン形式の本文のみとし、前置きや説明は付けないでください。

        {text}
    "}
}

pub fn summary_instruction(text: &str, max_length: usize) -> String {
    formatdoc! {"
        以下の文章を{max_length}文字以内で要約してください。
        要約文のみを出力してください。

        {text}
    "}
}
