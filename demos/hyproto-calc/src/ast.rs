use std::fmt;

use strum::{Display, EnumIs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryNode {
    pub op: BinaryOp,
    pub lhs: Box<Ast>,
    pub rhs: Box<Ast>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Box<Ast>,
    pub then_branch: Box<Ast>,
    pub else_branch: Box<Ast>,
}

#[derive(Debug, Clone, PartialEq, EnumIs)]
pub enum Ast {
    Number(f64),
    Variable(String),
    Neg(Box<Ast>),
    Binary(BinaryNode),
    /// `if c then a else b`: picks `a` when `c` is non-zero.
    If(Conditional),
    /// Application of a builtin such as `max(a, b)`.
    Call { name: String, args: Vec<Ast> },
}

impl Ast {
    pub fn binary(op: BinaryOp, lhs: Ast, rhs: Ast) -> Self {
        Ast::Binary(BinaryNode {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn conditional(condition: Ast, then_branch: Ast, else_branch: Ast) -> Self {
        Ast::If(Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Ast::Number(_) | Ast::Variable(_) => 1,
            Ast::Neg(inner) => 1 + inner.size(),
            Ast::Binary(node) => 1 + node.lhs.size() + node.rhs.size(),
            Ast::If(cond) => {
                1 + cond.condition.size() + cond.then_branch.size() + cond.else_branch.size()
            }
            Ast::Call { args, .. } => 1 + args.iter().map(Ast::size).sum::<usize>(),
        }
    }
}

/// Fully parenthesized rendering, used in log records.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Number(n) => write!(f, "{n}"),
            Ast::Variable(name) => write!(f, "{name}"),
            Ast::Neg(inner) => write!(f, "(-{inner})"),
            Ast::Binary(node) => write!(f, "({} {} {})", node.lhs, node.op, node.rhs),
            Ast::If(cond) => write!(
                f,
                "(if {} then {} else {})",
                cond.condition, cond.then_branch, cond.else_branch
            ),
            Ast::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
