/// 行分類のオプション
///
/// Scanning policy (hidden files, ignore files, ...) lives in the engine; only
/// the switches that change how a line is classified belong here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// ドキュメント文字列 (Python の `"""` 等) をコメントとして数える
    pub treat_doc_strings_as_comments: bool,
}

impl ClassifyConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            treat_doc_strings_as_comments: false,
        }
    }

    #[must_use]
    pub const fn with_doc_strings_as_comments(mut self, value: bool) -> Self {
        self.treat_doc_strings_as_comments = value;
        self
    }
}
