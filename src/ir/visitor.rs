use super::nodes::*;

/// IR visitor for emitters and other consumers of lowered statements.
///
/// Default methods walk children in the order lowering built them: the try
/// block first, then each catch handler top to bottom.
pub trait IrVisitor {
    fn visit_try(&mut self, node: &TryNode) {
        walk_try(self, node);
    }

    fn visit_block(&mut self, node: &BlockNode) {
        walk_block(self, node);
    }

    fn visit_catch(&mut self, node: &CatchNode) {
        walk_catch(self, node);
    }

    fn visit_statement(&mut self, node: &StatementNode) {
        match node {
            StatementNode::Try(try_node) => self.visit_try(try_node),
            StatementNode::External(external) => self.visit_external(external),
        }
    }

    fn visit_external(&mut self, _node: &ExternalNode) {}
}

pub fn walk_try<V: IrVisitor + ?Sized>(visitor: &mut V, node: &TryNode) {
    visitor.visit_block(&node.block);
    for catch in &node.catches {
        visitor.visit_catch(catch);
    }
}

pub fn walk_block<V: IrVisitor + ?Sized>(visitor: &mut V, node: &BlockNode) {
    for statement in &node.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_catch<V: IrVisitor + ?Sized>(visitor: &mut V, node: &CatchNode) {
    if let Some(block) = &node.block {
        visitor.visit_block(block);
    }
}
