//! # Declared Selector Inputs
//!
//! A selector declares its inputs as a value implementing [`Dependencies`].
//! Slices of the state tree are `Arc`s and compare by pointer; small scalar
//! parameters (an origin, a route id, a flag) compare by value.

use std::sync::Arc;

/// An input slice that can tell whether it is unchanged from a previous one.
pub trait Dependencies: Clone {
    fn unchanged(&self, previous: &Self) -> bool;
}

impl<T: ?Sized> Dependencies for Arc<T> {
    fn unchanged(&self, previous: &Self) -> bool {
        Arc::ptr_eq(self, previous)
    }
}

impl<T: Dependencies> Dependencies for Option<T> {
    fn unchanged(&self, previous: &Self) -> bool {
        match (self, previous) {
            (Some(current), Some(previous)) => current.unchanged(previous),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dependencies for $ty {
                fn unchanged(&self, previous: &Self) -> bool {
                    self == previous
                }
            }
        )*
    };
}

by_value!(bool, u64, usize, String, &'static str);

macro_rules! tuple_dependencies {
    ($($name:ident: $idx:tt),+) => {
        impl<$($name: Dependencies),+> Dependencies for ($($name,)+) {
            fn unchanged(&self, previous: &Self) -> bool {
                true $(&& self.$idx.unchanged(&previous.$idx))+
            }
        }
    };
}

tuple_dependencies!(A: 0);
tuple_dependencies!(A: 0, B: 1);
tuple_dependencies!(A: 0, B: 1, C: 2);
tuple_dependencies!(A: 0, B: 1, C: 2, D: 3);
tuple_dependencies!(A: 0, B: 1, C: 2, D: 3, E: 4);
