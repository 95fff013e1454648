use std::fmt;

use super::nodes::*;

/// Renders statements as nested S-expressions for debugging and test output.
///
/// Children that belong on their own line are indented two spaces under their
/// parent, and the indentation compounds through nesting:
///
/// ```text
/// (STry (SBlock
///   (SReturn #1))
///   (SCatch Exception e (SBlock
///     (SThrow #2))))
/// ```
pub struct AstPrinter {
    output: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self { output: String::new() }
    }

    pub fn print_try(&mut self, try_stmt: &TryStmt) -> String {
        self.output.clear();
        self.output.push_str(&render_try(try_stmt));
        self.output.clone()
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        self.output.clear();
        self.output.push_str(&render_stmt(stmt));
        self.output.clone()
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Try(try_stmt) => render_try(try_stmt),
        Stmt::External(external) => format!("({} #{})", external.kind, external.id.0),
    }
}

fn render_block(block: &Block) -> String {
    let own_line: Vec<String> = block.statements.iter().map(render_stmt).collect();
    multiline("SBlock", &[], &own_line)
}

fn render_catch(catch: &CatchClause) -> String {
    let mut same_line = vec![catch.exception_type.clone(), catch.name.clone()];
    if let Some(block) = &catch.block {
        same_line.push(render_block(block));
    }
    multiline("SCatch", &same_line, &[])
}

fn render_try(try_stmt: &TryStmt) -> String {
    let same_line: Vec<String> = try_stmt.body.iter().map(render_block).collect();
    let own_line: Vec<String> = try_stmt.catches.iter().map(render_catch).collect();
    multiline("STry", &same_line, &own_line)
}

fn multiline(name: &str, same_line: &[String], own_line: &[String]) -> String {
    let mut out = format!("({name}");
    for sub in same_line {
        out.push(' ');
        out.push_str(sub);
    }
    for sub in own_line {
        out.push_str("\n  ");
        out.push_str(&sub.replace('\n', "\n  "));
    }
    out.push(')');
    out
}

impl fmt::Display for TryStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_try(self))
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_stmt(self))
    }
}
