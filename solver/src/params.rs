//! Tuning parameters that can be overridden from environment variables.
//!
//! A parameter is read once, on first access. If the variable is unset the default is used;
//! if it is set but cannot be parsed, a warning is logged and the default is used as well.
//!
//! ```
//! use mapcolor::params::MAX_LOCAL_SEARCH_STEPS;
//! // MAPCOLOR_MAX_STEPS is not set in the doctest environment
//! assert_eq!(MAX_LOCAL_SEARCH_STEPS.get(), 100);
//! ```

use once_cell::sync::OnceCell;
use std::str::FromStr;

/// Default step budget of the local search.
pub static MAX_LOCAL_SEARCH_STEPS: EnvParam<u64> = EnvParam::new("MAPCOLOR_MAX_STEPS", "100");

/// Default seed of the random generator owned by a [`Solver`](crate::Solver).
pub static RANDOM_SEED: EnvParam<u64> = EnvParam::new("MAPCOLOR_SEED", "0");

pub struct EnvParam<T> {
    value: OnceCell<T>,
    env: &'static str,
    default: &'static str,
}

impl<T> EnvParam<T> {
    pub const fn new(env: &'static str, default: &'static str) -> EnvParam<T> {
        EnvParam {
            value: OnceCell::new(),
            env,
            default,
        }
    }

    /// Name of the environment variable backing this parameter.
    pub fn name(&self) -> &'static str {
        self.env
    }
}

impl<T: FromStr> EnvParam<T> {
    fn read_default(&self) -> T {
        match T::from_str(self.default) {
            Ok(v) => v,
            Err(_) => panic!("{}: invalid default value \"{}\"", self.env, self.default),
        }
    }

    fn read(&self, raw: Option<&str>) -> T {
        match raw.map(T::from_str) {
            Some(Ok(value)) => value,
            Some(Err(_)) => {
                tracing::warn!(
                    "could not parse \"{}\" for {}, using default \"{}\"",
                    raw.unwrap_or_default(),
                    self.env,
                    self.default
                );
                self.read_default()
            }
            None => self.read_default(),
        }
    }

    /// Value of the parameter, read from the environment on first access.
    ///
    /// # Panic
    /// Panics if the default value cannot be parsed.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| {
            let raw = std::env::var(self.env).ok();
            self.read(raw.as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static UNSET: EnvParam<u32> = EnvParam::new("MAPCOLOR_TEST_UNSET_PARAM", "7");

    #[test]
    fn default_when_unset() {
        assert_eq!(UNSET.get(), 7);
        assert_eq!(UNSET.name(), "MAPCOLOR_TEST_UNSET_PARAM");
    }

    #[test]
    fn invalid_values_fall_back_to_default() {
        let param: EnvParam<u64> = EnvParam::new("MAPCOLOR_TEST_PARAM", "12");
        assert_eq!(param.read(Some("42")), 42);
        assert_eq!(param.read(Some("many")), 12);
        assert_eq!(param.read(None), 12);
    }

    #[test]
    #[should_panic]
    fn invalid_default_panics() {
        let param: EnvParam<u64> = EnvParam::new("MAPCOLOR_TEST_BAD_DEFAULT", "none");
        param.read(None);
    }
}
