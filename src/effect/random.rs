//! Deterministic pseudo-random value generation.
//!
//! A [`Random<A>`] describes how to draw an `A` from a random number
//! generator without owning one. [`Random::run`] seeds a fresh
//! [`StdRng`] and evaluates the description, so the same seed always
//! reproduces the same draws. Combinators thread a single generator
//! through every step, the way [`State`](super::State) threads its
//! state value.
//!
//! # Examples
//!
//! Two dice, one seed:
//!
//! ```rust
//! use fallibars::effect::Random;
//!
//! let two_dice = Random::range(1..7)
//!     .flat_map(|first| Random::range(1..7).fmap(move |second| first + second));
//!
//! let total = two_dice.run(2024);
//! assert!((2..=12).contains(&total));
//! assert_eq!(total, two_dice.run(2024));
//! ```

#![forbid(unsafe_code)]

use std::ops::Range;
use std::rc::Rc;

use rand::distributions::Standard;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A description of how to draw a pseudo-random value.
///
/// `Random<A>` wraps a function from a generator to an `A`. The wrapped
/// function never runs until [`Random::run`] supplies a seed, and a
/// given seed always produces the same value, so generators compose and
/// replay freely.
///
/// # Examples
///
/// ```rust
/// use fallibars::effect::Random;
///
/// let percentage = Random::range(0..101);
/// let graded = percentage.fmap(|score| if score >= 60 { "pass" } else { "fail" });
///
/// let outcome = graded.run(7);
/// assert!(outcome == "pass" || outcome == "fail");
/// ```
pub struct Random<A>
where
    A: 'static,
{
    /// The wrapped sampling function.
    /// Shared behind an Rc so combinators can clone the generator.
    sample_function: Rc<dyn Fn(&mut StdRng) -> A>,
}

impl<A> Random<A>
where
    A: 'static,
{
    /// Creates a Random from a sampling function.
    ///
    /// # Arguments
    ///
    /// * `sample` - Draws a value from the supplied generator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let upper = Random::new(|_| 'A');
    /// assert_eq!(upper.run(0), 'A');
    /// ```
    pub fn new<F>(sample: F) -> Self
    where
        F: Fn(&mut StdRng) -> A + 'static,
    {
        Self {
            sample_function: Rc::new(sample),
        }
    }

    /// Draws the value using a generator seeded from `seed`.
    ///
    /// The same seed always reproduces the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let generator = Random::next_u32();
    /// assert_eq!(generator.run(7), generator.run(7));
    /// ```
    pub fn run(&self, seed: u64) -> A {
        let mut generator = StdRng::seed_from_u64(seed);
        (self.sample_function)(&mut generator)
    }

    /// Creates a Random that yields a fixed value without drawing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let fixed = Random::pure("constant");
    /// assert_eq!(fixed.run(3), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the drawn value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let doubled = Random::pure(21).fmap(|value| value * 2);
    /// assert_eq!(doubled.run(0), 42);
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Random<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let sample_function = self.sample_function;
        Random::new(move |generator| function((sample_function)(generator)))
    }

    /// Chains a second draw that depends on the first value.
    ///
    /// Both draws come from the same generator, so the second continues
    /// where the first left off.
    ///
    /// # Arguments
    ///
    /// * `function` - Builds the follow-up generator from the drawn value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let reroll_ones = Random::range(1..7).flat_map(|roll| {
    ///     if roll == 1 {
    ///         Random::range(1..7)
    ///     } else {
    ///         Random::pure(roll)
    ///     }
    /// });
    /// assert!((1..7).contains(&reroll_ones.run(5)));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Random<B>
    where
        F: Fn(A) -> Random<B> + 'static,
        B: 'static,
    {
        let sample_function = self.sample_function;
        Random::new(move |generator| {
            let value = (sample_function)(generator);
            let next = function(value);
            (next.sample_function)(generator)
        })
    }

    /// Alias for [`Random::flat_map`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let tagged = Random::range(0..10)
    ///     .and_then(|digit| Random::pure(format!("digit-{digit}")));
    /// assert!(tagged.run(1).starts_with("digit-"));
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Random<B>
    where
        F: Fn(A) -> Random<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Draws from two generators in order and combines the values.
    ///
    /// # Arguments
    ///
    /// * `other` - The generator to draw from second
    /// * `function` - Combines the two drawn values
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let point = Random::range(0..100).map2(Random::range(0..100), |x, y| (x, y));
    /// let (x, y) = point.run(12);
    /// assert!((0..100).contains(&x));
    /// assert!((0..100).contains(&y));
    /// ```
    pub fn map2<B, C, F>(self, other: Random<B>, function: F) -> Random<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first_sample = self.sample_function;
        let second_sample = other.sample_function;
        Random::new(move |generator| {
            let first = (first_sample)(generator);
            let second = (second_sample)(generator);
            function(first, second)
        })
    }

    /// Draws from two generators in order and pairs the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let paired = Random::pure(1).product(Random::pure("one"));
    /// assert_eq!(paired.run(0), (1, "one"));
    /// ```
    #[must_use]
    pub fn product<B>(self, other: Random<B>) -> Random<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Draws from every generator in order, collecting the values.
    ///
    /// A single generator threads through the whole list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let fixed = Random::sequence(vec![Random::pure(1), Random::pure(2), Random::pure(3)]);
    /// assert_eq!(fixed.run(0), vec![1, 2, 3]);
    /// ```
    pub fn sequence(generators: Vec<Self>) -> Random<Vec<A>> {
        Random::new(move |generator| {
            let mut samples = Vec::with_capacity(generators.len());
            for each in &generators {
                samples.push((each.sample_function)(generator));
            }
            samples
        })
    }

    /// Draws from this generator `count` times, collecting the values.
    ///
    /// Each draw continues the same generator, so the values differ even
    /// though the description is shared.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let rolls = Random::range(1..7).repeat(4).run(17);
    /// assert_eq!(rolls.len(), 4);
    /// assert!(rolls.iter().all(|roll| (1..7).contains(roll)));
    /// ```
    #[must_use]
    pub fn repeat(self, count: usize) -> Random<Vec<A>> {
        let sample_function = self.sample_function;
        Random::new(move |generator| {
            let mut samples = Vec::with_capacity(count);
            for _ in 0..count {
                samples.push((sample_function)(generator));
            }
            samples
        })
    }
}

// =============================================================================
// Primitive Generators
// =============================================================================

impl Random<u32> {
    /// Creates a generator that draws a uniformly distributed `u32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let generator = Random::next_u32();
    /// assert_eq!(generator.run(42), generator.run(42));
    /// ```
    #[must_use]
    pub fn next_u32() -> Self {
        Random::new(|generator| generator.next_u32())
    }
}

impl Random<f64> {
    /// Creates a generator that draws an `f64` uniformly from `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let sample = Random::next_f64().run(11);
    /// assert!((0.0..1.0).contains(&sample));
    /// ```
    #[must_use]
    pub fn next_f64() -> Self {
        Random::new(|generator| generator.sample(Standard))
    }

    /// Creates a generator that draws an `f64` uniformly from
    /// `[greater_or_equal, less_than)`.
    ///
    /// Scales a unit-interval draw, so one `between` draw advances the
    /// generator exactly as far as one [`Random::next_f64`] draw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let sample = Random::between(10.0, 20.0).run(3);
    /// assert!((10.0..20.0).contains(&sample));
    /// ```
    #[must_use]
    pub fn between(greater_or_equal: f64, less_than: f64) -> Self {
        Random::next_f64()
            .fmap(move |unit| greater_or_equal + unit * (less_than - greater_or_equal))
    }
}

impl Random<bool> {
    /// Creates a generator that draws `true` or `false` with equal odds.
    ///
    /// Compares a unit-interval draw against 0.5, so one `next_bool`
    /// draw advances the generator exactly as far as one
    /// [`Random::next_f64`] draw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let coin = Random::next_bool();
    /// assert_eq!(coin.run(2), Random::next_f64().run(2) >= 0.5);
    /// ```
    #[must_use]
    pub fn next_bool() -> Self {
        Random::next_f64().fmap(|unit| unit >= 0.5)
    }
}

impl<A> Random<A>
where
    A: SampleUniform + PartialOrd + Clone + 'static,
{
    /// Creates a generator that draws uniformly from a half-open range.
    ///
    /// # Panics
    ///
    /// Panics when drawn from an empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fallibars::effect::Random;
    ///
    /// let roll = Random::range(1..7);
    /// assert!((1..7).contains(&roll.run(21)));
    /// ```
    #[must_use]
    pub fn range(bounds: Range<A>) -> Self {
        Random::new(move |generator| generator.gen_range(bounds.clone()))
    }
}

// =============================================================================
// Clone and Display Implementations
// =============================================================================

impl<A> Clone for Random<A>
where
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            sample_function: self.sample_function.clone(),
        }
    }
}

impl<A> std::fmt::Display for Random<A>
where
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Random>")
    }
}
