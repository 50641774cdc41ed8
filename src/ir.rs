use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text { content: String },
    Code { content: String },
}

pub type BlockSequence = Vec<Block>;

impl Block {
    pub fn text(content: impl Into<String>) -> Self {
        Block::Text {
            content: content.into(),
        }
    }

    pub fn code(content: impl Into<String>) -> Self {
        Block::Code {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Block::Text { content } | Block::Code { content } => content,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code { .. })
    }
}

pub fn flatten(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::content)
        .collect::<Vec<_>>()
        .join("\n\n")
}
