use std::fmt;

use multitest_core::Value;
use syn::{Expr, ExprLit, ExprUnary, Lit, LitStr, UnOp};

use crate::error::messages;

/// A domain value: the source expression to bind and the [`Value`] used to
/// name and document the generated test.
#[derive(Debug, Clone)]
pub(crate) struct Literal {
    pub(crate) value: Value,
    pub(crate) expr: Expr,
}

impl Literal {
    /// A string literal for each character of `text`.
    pub(crate) fn chars(text: &LitStr) -> Vec<Self> {
        text.value()
            .chars()
            .map(|c| {
                let s = c.to_string();
                Self {
                    expr: Expr::Lit(ExprLit {
                        attrs: vec![],
                        lit: Lit::Str(LitStr::new(&s, text.span())),
                    }),
                    value: Value::Text(s),
                }
            })
            .collect()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl TryFrom<Expr> for Literal {
    type Error = syn::Error;

    fn try_from(expr: Expr) -> Result<Self, Self::Error> {
        match value_of(&expr) {
            Some(value) => Ok(Self { value, expr }),
            None => Err(syn::Error::new_spanned(expr, messages::UNSUPPORTED_VALUE)),
        }
    }
}

fn value_of(expr: &Expr) -> Option<Value> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Int(v) if matches!(v.suffix(), "f32" | "f64") => {
                v.base10_parse::<f64>().ok().map(Value::Float)
            }
            Lit::Int(v) => v.base10_parse::<i64>().ok().map(Value::Int),
            Lit::Float(v) => v.base10_parse::<f64>().ok().map(Value::Float),
            Lit::Str(v) => Some(Value::Text(v.value())),
            Lit::Char(v) => Some(Value::Text(v.value().to_string())),
            Lit::Bool(v) => Some(Value::Bool(v.value)),
            _ => None,
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => match value_of(expr)? {
            Value::Int(v) => Some(Value::Int(-v)),
            Value::Float(v) => Some(Value::Float(-v)),
            _ => None,
        },
        Expr::Group(g) => value_of(&g.expr),
        Expr::Paren(p) => value_of(&p.expr),
        _ => None,
    }
}
