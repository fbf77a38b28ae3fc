//! Stateful computation threaded through pure functions.
//!
//! A [`State<S, A>`] wraps a transition function `S -> (A, S)`: given the
//! incoming state it produces a result together with the state the next
//! step will see. Combinators compose transitions without mutating
//! anything; the caller supplies the initial state once, at
//! [`State::run`].
//!
//! # Laws
//!
//! The chaining operations satisfy the usual identities:
//!
//! - Left Identity: `State::pure(a).flat_map(f)` behaves like `f(a)`
//! - Right Identity: `state.flat_map(State::pure)` behaves like `state`
//! - Put Get: `State::put(s).then(State::get())` yields `s`
//! - Modify Composition: `State::modify(f).then(State::modify(g))`
//!   behaves like `State::modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! Threading a running balance:
//!
//! ```rust
//! use fallibars::effect::State;
//!
//! fn deposit(amount: i64) -> State<i64, ()> {
//!     State::modify(move |balance| balance + amount)
//! }
//!
//! let computation = deposit(300)
//!     .then(deposit(200))
//!     .then(State::get());
//!
//! let (balance, final_state) = computation.run(0);
//! assert_eq!(balance, 500);
//! assert_eq!(final_state, 500);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

/// A computation that threads a state value through a chain of steps.
///
/// `State<S, A>` wraps a function from an incoming state of type `S` to a
/// pair of result `A` and outgoing state `S`. Nothing executes until
/// [`State::run`] supplies the initial state.
///
/// # Examples
///
/// ```rust
/// use fallibars::effect::State;
///
/// let next_label: State<u32, String> = State::get()
///     .flat_map(|counter| {
///         State::put(counter + 1).then(State::pure(format!("item-{counter}")))
///     });
///
/// let (label, counter) = next_label.run(7);
/// assert_eq!(label, "item-7");
/// assert_eq!(counter, 8);
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped transition function.
    /// Shared behind an Rc so combinators can clone the computation.
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a State from a transition function.
    ///
    /// # Arguments
    ///
    /// * `transition` - Maps the incoming state to a (result, next state) pair
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<u32, bool> = State::new(|count: u32| (count % 2 == 0, count + 1));
    /// let (was_even, next) = step.run(4);
    /// assert!(was_even);
    /// assert_eq!(next, 5);
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation with the given initial state.
    ///
    /// Returns the result together with the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|count: i32| (count * 10, count + 1));
    /// assert_eq!(step.run(3), (30, 4));
    /// ```
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|count: i32| (count * 10, count + 1));
    /// assert_eq!(step.eval(3), 30);
    /// ```
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and keeps only the final state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|count: i32| (count * 10, count + 1));
    /// assert_eq!(step.exec(3), 4);
    /// ```
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a State that yields a fixed result and leaves the state alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let fixed: State<i32, &str> = State::pure("ready");
    /// assert_eq!(fixed.run(9), ("ready", 9));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result, leaving the state transition untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|count: i32| (count, count + 1));
    /// let doubled = step.fmap(|value| value * 2);
    /// assert_eq!(doubled.run(5), (10, 6));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, next_state) = (transition)(state);
            (function(result), next_state)
        })
    }

    /// Chains a second computation that depends on the first result.
    ///
    /// The state this computation produces feeds the one `function`
    /// returns.
    ///
    /// # Arguments
    ///
    /// * `function` - Builds the follow-up computation from the result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|count: i32| (count, count + 1));
    /// let chained = step.flat_map(|seen| State::new(move |count: i32| (seen + count, count)));
    /// // First step: result 5, state 6. Second step: result 5 + 6.
    /// assert_eq!(chained.run(5), (11, 6));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (result, intermediate_state) = (transition)(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for [`State::flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let render: State<i32, String> = State::get()
    ///     .and_then(|count: i32| State::pure(count.to_string()));
    /// assert_eq!(render.eval(12), "12");
    /// ```
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences another computation after this one, discarding this result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let bump: State<i32, ()> = State::modify(|count| count + 1);
    /// let read: State<i32, i32> = State::get();
    /// assert_eq!(bump.then(read).run(41), (42, 42));
    /// ```
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs two computations in order and combines their results.
    ///
    /// # Arguments
    ///
    /// * `other` - The computation to run second
    /// * `function` - Combines the two results
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|count: i32| (count, count + 1));
    /// let second: State<i32, i32> = State::new(|count: i32| (count * 100, count + 1));
    /// let combined = first.map2(second, |a, b| a + b);
    /// // first: (3, 4); second with state 4: (400, 5)
    /// assert_eq!(combined.run(3), (403, 5));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first_transition = self.transition;
        let second_transition = other.transition;
        State::new(move |state| {
            let (first_result, intermediate_state) = (first_transition)(state);
            let (second_result, final_state) = (second_transition)(intermediate_state);
            (function(first_result, second_result), final_state)
        })
    }

    /// Runs two computations in order and pairs their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let read: State<i32, i32> = State::get();
    /// let tag: State<i32, &str> = State::pure("checked");
    /// assert_eq!(read.product(tag).run(7), ((7, "checked"), 7));
    /// ```
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs every computation in order, collecting each result.
    ///
    /// The state threads through the whole list; the final state is
    /// whatever the last computation leaves behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let draw_ticket: State<u32, u32> = State::new(|next: u32| (next, next + 1));
    /// let tickets = State::sequence(vec![
    ///     draw_ticket.clone(),
    ///     draw_ticket.clone(),
    ///     draw_ticket,
    /// ]);
    /// assert_eq!(tickets.run(100), (vec![100, 101, 102], 103));
    /// ```
    pub fn sequence(states: Vec<Self>) -> State<S, Vec<A>> {
        State::new(move |initial_state| {
            let mut results = Vec::with_capacity(states.len());
            let mut current_state = initial_state;
            for state in &states {
                let (result, next_state) = state.run(current_state);
                results.push(result);
                current_state = next_state;
            }
            (results, current_state)
        })
    }
}

// =============================================================================
// State Access Operations
// =============================================================================

impl<St> State<St, St>
where
    St: Clone + 'static,
{
    /// Creates a State that yields the current state unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let read: State<i32, i32> = State::get();
    /// assert_eq!(read.run(13), (13, 13));
    /// ```
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: St| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Creates a State that replaces the state outright.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let reset: State<i32, ()> = State::put(0);
    /// assert_eq!(reset.exec(99), 0);
    /// ```
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that rewrites the state through a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::State;
    ///
    /// let shout: State<String, ()> = State::modify(|text: String| text.to_uppercase());
    /// assert_eq!(shout.exec("quiet".to_string()), "QUIET");
    /// ```
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

// =============================================================================
// Clone and Display Implementations
// =============================================================================

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
