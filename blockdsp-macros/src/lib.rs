use proc_macro::TokenStream;
use proc_macro2::{Delimiter, Spacing, TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::{Error, Expr, Result};

/// Composes blocks with Faust-style infix notation.
///
/// This macro rewrites an expression built from four operators into nested
/// calls to the `blockdsp` combinators:
///
/// | Operator | Combinator |
/// |----------|------------|
/// | `a , b`  | `parallel(a, b)` |
/// | `a : b`  | `serial(a, b)` |
/// | `a <: b` | `split(a, b)` |
/// | `a :> b` | `merge(a, b)` |
///
/// All four share one precedence level and associate to the left, so
/// `a : b , c` means `(a : b) , c`. Use parentheses to group. Each operand is
/// any Rust expression evaluating to a `Block` (or a reference to one) that
/// contains none of the operators at its top level; wrap anything else in
/// braces. Operands are cloned, so variables stay usable afterwards.
///
/// # Examples
///
/// ```ignore
/// use blockdsp::{Block, blocks, identity};
///
/// let tone = Block::<f32>::sine(44100, 440.0_f32);
/// // Fan the tone out to two gains, then sum them back to mono
/// let graph = blocks!(tone <: (Block::gain(0.5_f32), Block::gain(0.25_f32)) :> identity(1));
/// ```
#[proc_macro]
pub fn blocks(input: TokenStream) -> TokenStream {
    match expand(input.into()) {
        Ok(expanded) => expanded.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Parallel,
    Serial,
    Split,
    Merge,
}

impl Op {
    fn combinator(self) -> TokenStream2 {
        match self {
            Op::Parallel => quote!(::blockdsp::combinators::parallel),
            Op::Serial => quote!(::blockdsp::combinators::serial),
            Op::Split => quote!(::blockdsp::combinators::split),
            Op::Merge => quote!(::blockdsp::combinators::merge),
        }
    }
}

/// One piece of a flat operator chain.
#[derive(Debug)]
enum Item {
    Operand(Vec<TokenTree>),
    Op(Op, proc_macro2::Span),
}

fn expand(input: TokenStream2) -> Result<TokenStream2> {
    let items = tokenize(input)?;
    fold(items)
}

/// Splits the token stream into operands and operators at the top level.
fn tokenize(input: TokenStream2) -> Result<Vec<Item>> {
    let tokens: Vec<TokenTree> = input.into_iter().collect();
    let mut items = Vec::new();
    let mut operand = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let next_char = match tokens.get(i + 1) {
            Some(TokenTree::Punct(p)) => Some(p.as_char()),
            _ => None,
        };

        let op = match &tokens[i] {
            TokenTree::Punct(p) => match (p.as_char(), p.spacing(), next_char) {
                (',', _, _) => Some((Op::Parallel, 1)),
                ('<', Spacing::Joint, Some(':')) => Some((Op::Split, 2)),
                (':', Spacing::Joint, Some('>')) => Some((Op::Merge, 2)),
                (':', Spacing::Joint, Some(':')) => {
                    // Path separator; belongs to the operand.
                    operand.push(tokens[i].clone());
                    operand.push(tokens[i + 1].clone());
                    i += 2;
                    continue;
                }
                (':', _, _) => Some((Op::Serial, 1)),
                _ => None,
            },
            _ => None,
        };

        match op {
            Some((op, width)) => {
                let span = tokens[i].span();
                if operand.is_empty() {
                    return Err(Error::new(span, "expected a block before this operator"));
                }
                items.push(Item::Operand(std::mem::take(&mut operand)));
                items.push(Item::Op(op, span));
                i += width;
            }
            None => {
                operand.push(tokens[i].clone());
                i += 1;
            }
        }
    }

    match items.last() {
        Some(Item::Op(_, span)) if operand.is_empty() => {
            return Err(Error::new(*span, "expected a block after this operator"));
        }
        None if operand.is_empty() => {
            return Err(Error::new(
                proc_macro2::Span::call_site(),
                "expected a block expression",
            ));
        }
        _ => {}
    }
    items.push(Item::Operand(operand));
    Ok(items)
}

/// Folds `operand (op operand)*` from the left.
fn fold(items: Vec<Item>) -> Result<TokenStream2> {
    let mut items = items.into_iter();
    let mut acc = match items.next() {
        Some(Item::Operand(tokens)) => operand(tokens)?,
        _ => unreachable!("tokenize always starts with an operand"),
    };

    while let Some(Item::Op(op, _)) = items.next() {
        let rhs = match items.next() {
            Some(Item::Operand(tokens)) => operand(tokens)?,
            _ => unreachable!("tokenize always ends with an operand"),
        };
        let combinator = op.combinator();
        acc = quote!(#combinator(#acc, #rhs));
    }
    Ok(acc)
}

/// Expands one operand. A lone parenthesized group is a nested chain.
fn operand(tokens: Vec<TokenTree>) -> Result<TokenStream2> {
    if let [TokenTree::Group(group)] = tokens.as_slice() {
        if group.delimiter() == Delimiter::Parenthesis {
            return expand(group.stream());
        }
    }
    let stream: TokenStream2 = tokens.into_iter().collect();
    let expr: Expr = syn::parse2(stream)?;
    Ok(quote!((#expr).clone()))
}
