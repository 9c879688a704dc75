//! Left-to-right function composition
//!
//! [`Flow`] is a reusable unary function assembled from stages. Building a
//! flow never runs anything; [`Flow::call`] pushes a value through every stage
//! in the order the stages were added.
//!
//! ```
//! use pathflow::flow;
//!
//! let inc = |i: i32| i + 1;
//! let square = |i: i32| i * i;
//!
//! let primer = flow!(inc, inc, square, |o: i32| format!("result {o}"));
//! assert_eq!(primer.call(1), "result 9");
//! ```

use std::fmt;
use std::rc::Rc;

/// A composed unary function from `A` to `B`
///
/// Cloning a flow is cheap: stages are shared, not copied.
pub struct Flow<A, B> {
    run: Rc<dyn Fn(A) -> B>,
}

impl<A: 'static> Flow<A, A> {
    /// The empty flow: returns its input unchanged
    pub fn identity() -> Self {
        Self::new(|a| a)
    }
}

impl<A: 'static, B: 'static> Flow<A, B> {
    pub fn new(f: impl Fn(A) -> B + 'static) -> Self {
        Self { run: Rc::new(f) }
    }

    /// Append a stage receiving this flow's output
    pub fn then<C: 'static>(self, next: impl Fn(B) -> C + 'static) -> Flow<A, C> {
        let run = self.run;
        Flow::new(move |a| next(run(a)))
    }

    /// Run the flow on `input`
    pub fn call(&self, input: A) -> B {
        (self.run)(input)
    }

    /// Unwrap into a plain closure
    pub fn into_fn(self) -> impl Fn(A) -> B {
        move |a| (self.run)(a)
    }
}

impl<A: 'static, T: 'static, E: 'static> Flow<A, Result<T, E>> {
    /// Append a fallible stage; an `Err` skips every later stage.
    pub fn and_then<C: 'static>(
        self,
        next: impl Fn(T) -> Result<C, E> + 'static,
    ) -> Flow<A, Result<C, E>> {
        self.then(move |res| res.and_then(&next))
    }
}

impl<A, B> Clone for Flow<A, B> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<A, B> fmt::Debug for Flow<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("input", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<B>())
            .finish()
    }
}

/// Compose same-typed stages known only at runtime
///
/// Zero stages gives the identity flow.
pub fn flow_all<T, F, I>(stages: I) -> Flow<T, T>
where
    T: 'static,
    F: Fn(T) -> T + 'static,
    I: IntoIterator<Item = F>,
{
    stages
        .into_iter()
        .fold(Flow::identity(), |flow, stage| flow.then(stage))
}

/// Push `input` through `stages` right away
pub fn thread_all<T, F, I>(input: T, stages: I) -> T
where
    T: 'static,
    F: Fn(T) -> T + 'static,
    I: IntoIterator<Item = F>,
{
    flow_all(stages).call(input)
}

/// A function that ignores the world and returns `value`
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Compose stages left to right into a [`Flow`]
///
/// `flow!(f1, f2, f3).call(x)` is `f3(f2(f1(x)))`. `flow!()` is the identity.
#[macro_export]
macro_rules! flow {
    ($($stage:expr),* $(,)?) => {
        $crate::Flow::identity()$(.then($stage))*
    };
}

/// Run a value through stages immediately: `thread!(x, f1, f2) == f2(f1(x))`
#[macro_export]
macro_rules! thread {
    ($input:expr $(, $stage:expr)* $(,)?) => {
        $crate::flow!($($stage),*).call($input)
    };
}
