use super::Location;

/// Identity of a node produced by the parser, stable for the life of one script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Try(Box<TryStmt>),
    /// Any statement kind whose analysis belongs to another front-end stage.
    External(ExternalStmt),
}

impl Stmt {
    pub fn location(&self) -> &Location {
        match self {
            Stmt::Try(try_stmt) => &try_stmt.location,
            Stmt::External(external) => &external.location,
        }
    }
}

/// Statement handed through untouched; `kind` is only used for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalStmt {
    pub id: NodeId,
    pub kind: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub location: Location,
}

impl Block {
    pub fn new(location: Location, statements: Vec<Stmt>) -> Self {
        Self { statements, location }
    }
}

/// One `catch (Type name) { ... }` clause
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub exception_type: String,
    pub name: String,
    /// `None` for an empty handler: `catch (E e) {}`
    pub block: Option<Block>,
    pub location: Location,
}

impl CatchClause {
    pub fn new(
        location: Location,
        exception_type: impl Into<String>,
        name: impl Into<String>,
        block: Option<Block>,
    ) -> Self {
        Self {
            exception_type: exception_type.into(),
            name: name.into(),
            block,
            location,
        }
    }
}

/// A try statement with its ordered catch clauses.
///
/// The parser produces this once and nothing mutates it afterwards. `body` is
/// optional only because a damaged parse can leave it out; analysis rejects
/// that case before looking at anything else. Clause order is the order the
/// runtime tries them in and must be kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub id: NodeId,
    pub body: Option<Block>,
    pub catches: Vec<CatchClause>,
    pub location: Location,
}

impl TryStmt {
    pub fn new(
        id: NodeId,
        location: Location,
        body: Option<Block>,
        catches: Vec<CatchClause>,
    ) -> Self {
        Self {
            id,
            body,
            catches,
            location,
        }
    }
}
