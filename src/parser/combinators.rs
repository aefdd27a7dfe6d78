//! Parser combinators over token slices
//!
//! A [`Parser`] is a function from a mutable [`Cursor`] to an optional result.
//! The contract every parser here keeps: when it returns `None`, the cursor is
//! back where it was before the call. That makes ordered choice a plain "try
//! the left side, then the right side from the same position".
//!
//! There is no error type at this level. The cursor records the furthest
//! position any parser advanced to; callers use it to locate failures.

use once_cell::unsync::OnceCell;
use std::rc::{Rc, Weak};

/// Index-based cursor over an immutable token slice
#[derive(Debug, Clone)]
pub struct Cursor<'t, T> {
    tokens: &'t [T],
    position: usize,
    furthest: usize,
}

impl<'t, T> Cursor<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self {
            tokens,
            position: 0,
            furthest: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Highest position reached so far, including by attempts that backtracked
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn rewind(&mut self, position: usize) {
        self.position = position;
    }

    pub fn peek(&self) -> Option<&'t T> {
        self.tokens.get(self.position)
    }

    /// Up to `max` tokens following the current one
    pub fn lookahead(&self, max: usize) -> &'t [T] {
        let from = (self.position + 1).min(self.tokens.len());
        let to = (from + max).min(self.tokens.len());
        &self.tokens[from..to]
    }

    pub fn advance(&mut self) -> Option<&'t T> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        self.furthest = self.furthest.max(self.position);
        Some(token)
    }

    pub fn remaining(&self) -> &'t [T] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

type ParseFn<T, A> = dyn Fn(&mut Cursor<'_, T>) -> Option<A>;

/// A backtracking parser producing `A` from tokens of type `T`
pub struct Parser<T, A> {
    run: Rc<ParseFn<T, A>>,
}

impl<T, A> Clone for Parser<T, A> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

/// Run `body`, rewinding the cursor if it fails
fn backtrack<'t, T, A>(
    cursor: &mut Cursor<'t, T>,
    body: impl FnOnce(&mut Cursor<'t, T>) -> Option<A>,
) -> Option<A> {
    let start = cursor.position();
    let result = body(&mut *cursor);
    if result.is_none() {
        cursor.rewind(start);
    }
    result
}

impl<T: 'static, A: 'static> Parser<T, A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Cursor<'_, T>) -> Option<A> + 'static,
    {
        Self { run: Rc::new(f) }
    }

    /// Run against a cursor
    pub fn run(&self, cursor: &mut Cursor<'_, T>) -> Option<A> {
        (self.run)(cursor)
    }

    /// Run from the start of `tokens`, returning the result and the final cursor
    pub fn parse_prefix<'t>(&self, tokens: &'t [T]) -> (Option<A>, Cursor<'t, T>) {
        let mut cursor = Cursor::new(tokens);
        let result = self.run(&mut cursor);
        (result, cursor)
    }

    pub fn map<B: 'static, F>(self, f: F) -> Parser<T, B>
    where
        F: Fn(A) -> B + 'static,
    {
        Parser::new(move |cursor| backtrack(cursor, |cursor| self.run(cursor).map(&f)))
    }

    /// Fail when the result does not satisfy `predicate`
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&A) -> bool + 'static,
    {
        Parser::new(move |cursor| {
            backtrack(cursor, |cursor| self.run(cursor).filter(|value| predicate(value)))
        })
    }

    pub fn then<B: 'static>(self, other: Parser<T, B>) -> Parser<T, (A, B)> {
        Parser::new(move |cursor| {
            backtrack(cursor, |cursor| {
                let a = self.run(cursor)?;
                let b = other.run(cursor)?;
                Some((a, b))
            })
        })
    }

    /// Sequence, keeping the left result
    pub fn then_ignore<B: 'static>(self, other: Parser<T, B>) -> Self {
        Parser::new(move |cursor| {
            backtrack(cursor, |cursor| {
                let a = self.run(cursor)?;
                other.run(cursor)?;
                Some(a)
            })
        })
    }

    /// Sequence, keeping the right result
    pub fn ignore_then<B: 'static>(self, other: Parser<T, B>) -> Parser<T, B> {
        Parser::new(move |cursor| {
            backtrack(cursor, |cursor| {
                self.run(cursor)?;
                other.run(cursor)
            })
        })
    }

    /// Ordered choice: `other` only runs if `self` fails
    pub fn or(self, other: Self) -> Self {
        Parser::new(move |cursor| {
            backtrack(cursor, |cursor| self.run(cursor))
                .or_else(|| backtrack(cursor, |cursor| other.run(cursor)))
        })
    }

    /// Zero or more repetitions; never fails
    ///
    /// A repetition that consumes nothing ends the loop.
    pub fn many(self) -> Parser<T, Vec<A>> {
        Parser::new(move |cursor| {
            let mut items = Vec::new();
            loop {
                let start = cursor.position();
                match self.run(cursor) {
                    Some(item) => {
                        items.push(item);
                        if cursor.position() == start {
                            break;
                        }
                    }
                    None => {
                        cursor.rewind(start);
                        break;
                    }
                }
            }
            Some(items)
        })
    }

    /// One or more items separated by `separator`
    pub fn separated_by<S: 'static>(self, separator: Parser<T, S>) -> Parser<T, Vec<A>> {
        let rest = separator.ignore_then(self.clone()).many();
        self.then(rest).map(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        })
    }

    /// Succeed with `None` instead of failing
    pub fn or_not(self) -> Parser<T, Option<A>> {
        Parser::new(move |cursor| Some(backtrack(cursor, |cursor| self.run(cursor))))
    }
}

/// Succeed with `value` without consuming anything
pub fn pure<T: 'static, A: Clone + 'static>(value: A) -> Parser<T, A> {
    Parser::new(move |_| Some(value.clone()))
}

/// Always fail
pub fn fail<T: 'static, A: 'static>() -> Parser<T, A> {
    Parser::new(|_| None)
}

/// Consume one token if `f` maps it to a value
pub fn select<T: 'static, B: 'static, F>(f: F) -> Parser<T, B>
where
    F: Fn(&T) -> Option<B> + 'static,
{
    Parser::new(move |cursor| {
        let value = cursor.peek().and_then(&f)?;
        cursor.advance();
        Some(value)
    })
}

/// Consume one token if it satisfies `predicate`
pub fn satisfy<T, F>(predicate: F) -> Parser<T, T>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + 'static,
{
    select(move |token: &T| predicate(token).then(|| token.clone()))
}

/// Consume one token equal to `expected`
pub fn just<T>(expected: T) -> Parser<T, T>
where
    T: Clone + PartialEq + 'static,
{
    satisfy(move |token: &T| *token == expected)
}

/// Try each parser in order; the first success wins
pub fn choice<T: 'static, A: 'static>(parsers: Vec<Parser<T, A>>) -> Parser<T, A> {
    parsers.into_iter().reduce(Parser::or).unwrap_or_else(fail)
}

pub fn lift2<T, A, B, R, F>(f: F, a: Parser<T, A>, b: Parser<T, B>) -> Parser<T, R>
where
    T: 'static,
    A: 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + 'static,
{
    a.then(b).map(move |(a, b)| f(a, b))
}

pub fn lift3<T, A, B, C, R, F>(
    f: F,
    a: Parser<T, A>,
    b: Parser<T, B>,
    c: Parser<T, C>,
) -> Parser<T, R>
where
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + 'static,
{
    a.then(b).then(c).map(move |((a, b), c)| f(a, b, c))
}

pub fn lift4<T, A, B, C, D, R, F>(
    f: F,
    a: Parser<T, A>,
    b: Parser<T, B>,
    c: Parser<T, C>,
    d: Parser<T, D>,
) -> Parser<T, R>
where
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    R: 'static,
    F: Fn(A, B, C, D) -> R + 'static,
{
    a.then(b)
        .then(c)
        .then(d)
        .map(move |(((a, b), c), d)| f(a, b, c, d))
}

/// Accumulate tokens until `stop` says the current one ends the run
///
/// `stop` sees the current token and at most `max_lookahead` tokens after it.
/// Never fails; the result may be empty.
pub fn take_while_lookahead<T, F>(max_lookahead: usize, stop: F) -> Parser<T, Vec<T>>
where
    T: Clone + 'static,
    F: Fn(&T, &[T]) -> bool + 'static,
{
    Parser::new(move |cursor| {
        let mut taken = Vec::new();
        while let Some(current) = cursor.peek() {
            if stop(current, cursor.lookahead(max_lookahead)) {
                break;
            }
            taken.push(current.clone());
            cursor.advance();
        }
        Some(taken)
    })
}

/// Forward reference for recursive grammars
///
/// Declare first, hand out [`Recursive::reference`] proxies while building the
/// grammar, then [`Recursive::define`] it. Each grammar value owns its own slot,
/// so separate parses never share state.
pub struct Recursive<T, A> {
    slot: Rc<OnceCell<Parser<T, A>>>,
}

impl<T: 'static, A: 'static> Recursive<T, A> {
    pub fn declare() -> Self {
        Self {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// A proxy that resolves the definition each time it runs
    ///
    /// The proxy holds a weak handle: the definition usually contains the proxy
    /// itself, and a strong one would form a cycle. It fails if the definition
    /// is missing or the declaration has been dropped.
    pub fn reference(&self) -> Parser<T, A> {
        let slot: Weak<OnceCell<Parser<T, A>>> = Rc::downgrade(&self.slot);
        Parser::new(move |cursor| {
            let slot = slot.upgrade()?;
            let parser = slot.get()?;
            parser.run(cursor)
        })
    }

    /// Set the definition. Returns `false` if it was already defined.
    pub fn define(&self, parser: Parser<T, A>) -> bool {
        self.slot.set(parser).is_ok()
    }

    /// The defined parser, keeping the slot alive for its proxies
    pub fn into_parser(self) -> Parser<T, A> {
        let slot = self.slot;
        Parser::new(move |cursor| slot.get()?.run(cursor))
    }
}

/// Build a self-referential parser from a closure receiving its own proxy
pub fn recursive<T, A, F>(build: F) -> Parser<T, A>
where
    T: 'static,
    A: 'static,
    F: FnOnce(Parser<T, A>) -> Parser<T, A>,
{
    let forward = Recursive::declare();
    let defined = forward.define(build(forward.reference()));
    debug_assert!(defined, "fresh slot defined twice");
    forward.into_parser()
}
