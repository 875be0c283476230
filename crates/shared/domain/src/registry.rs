//! Type-erased registry primitives for feature slices.
//!
//! A feature crate initializes once at startup and hands back its state as an
//! [`InitializedSlice`]; the server keeps these keyed by [`TypeId`] so
//! handlers can recover the concrete state later without the registry knowing
//! any feature type up front.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Shared, thread-safe feature state.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Exposes the concrete type behind the trait object for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Feature state paired with the [`TypeId`] it registers under.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps concrete feature state, capturing its [`TypeId`] as the key.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}
