use crate::ast::{Location, NodeId};

/// Lowered try statement consumed by bytecode emission.
///
/// `catches` is in source order; the runtime dispatches to the first handler
/// whose type matches, so emitters must not reorder it.
#[derive(Debug, Clone, PartialEq)]
pub struct TryNode {
    pub block: BlockNode,
    pub catches: Vec<CatchNode>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub statements: Vec<StatementNode>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchNode {
    pub exception_type: String,
    pub symbol: String,
    pub block: Option<BlockNode>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementNode {
    Try(Box<TryNode>),
    External(ExternalNode),
}

/// Lowered form of a statement owned by another stage, referenced by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalNode {
    pub id: NodeId,
    pub location: Location,
}
