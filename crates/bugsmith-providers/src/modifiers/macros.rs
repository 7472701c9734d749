//! Declarative definition of concrete modifiers
//!
//! Every strategy has the same shell: a validated [`ModifierConfig`], an
//! owned [`Coin`], and constructors. Only the mutation differs.
//!
//! [`ModifierConfig`]: crate::modifiers::ModifierConfig
//! [`Coin`]: crate::modifiers::Coin

/// Define a modifier type from its identity and mutation function
///
/// The mutation receives the entity and the modifier's coin, and returns the
/// rewritten entity text or `None`.
#[macro_export]
macro_rules! procedural_modifier {
    (
        $(#[$meta:meta])*
        $ty:ident {
            name: $name:expr,
            explanation: $explanation:expr,
            conditions: [$($property:expr),* $(,)?],
            min_complexity: $min:expr,
            mutate: $mutate:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty {
            config: $crate::modifiers::ModifierConfig,
            coin: $crate::modifiers::Coin,
        }

        impl $ty {
            /// Built-in configuration of this strategy
            pub fn default_config() -> $crate::modifiers::ModifierConfig {
                let conditions = $crate::TagSet::empty()
                    $(.with($property))*;
                $crate::modifiers::ModifierConfig::new($name, $explanation, conditions)
                    .with_min_complexity($min)
            }

            /// Create the modifier, validating its configuration
            pub fn new(config: $crate::modifiers::ModifierConfig) -> $crate::Result<Self> {
                config.validate()?;
                let coin = $crate::modifiers::Coin::new(config.seed, config.likelihood);
                Ok(Self { config, coin })
            }

            /// Default configuration with the given likelihood
            pub fn with_likelihood(likelihood: f64) -> $crate::Result<Self> {
                Self::new(Self::default_config().with_likelihood(likelihood))
            }
        }

        impl $crate::modifiers::ProceduralModifier for $ty {
            fn config(&self) -> &$crate::modifiers::ModifierConfig {
                &self.config
            }

            fn coin(&mut self) -> &mut $crate::modifiers::Coin {
                &mut self.coin
            }

            fn modify(&mut self, entity: &$crate::CodeEntity) -> Option<$crate::BugRewrite> {
                let rewrite = $mutate(entity, &mut self.coin);
                $crate::modifiers::base::finish(&self.config, entity, rewrite)
            }
        }
    };
}
