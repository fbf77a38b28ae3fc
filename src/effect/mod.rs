//! Computation builders with deterministic evaluation.
//!
//! Both builders here wrap a plain function behind an `Rc`, so
//! computations clone cheaply and nothing runs until the caller asks:
//!
//! - [`State`]: threads a state value through a chain of steps; running
//!   it supplies the initial state.
//! - [`Random`]: describes pseudo-random draws; running it supplies a
//!   seed, and the same seed always reproduces the same draws.
//!
//! # Examples
//!
//! ```rust
//! use fallibars::effect::State;
//!
//! let increment: State<i32, ()> = State::modify(|count| count + 1);
//! let count_twice = increment.clone().then(increment).then(State::get());
//! assert_eq!(count_twice.eval(0), 2);
//! ```
//!
//! ```rust
//! use fallibars::effect::Random;
//!
//! let roll = Random::range(1..7);
//! assert_eq!(roll.run(99), roll.run(99));
//! ```

mod random;
mod state;

pub use random::Random;
pub use state::State;
