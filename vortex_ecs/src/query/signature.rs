//! Utilities for signature of *queries* in ECS.

use std::any::TypeId;

use crate::Component;

/// Signature of the *query* in ECS.
///
/// Describes which component types an entity must have to match the query.
///
pub trait Signature {
    /// Array of [TypeId]s which represents set of types in this signature.
    fn type_ids() -> Box<[TypeId]>;
}

// Generate implementations of Signature for empty tuple (unit type)
// and for tuples up to 12 elements.

macro_rules! impl_signature {
    ($($name:ident),*) => {
        impl<$($name),*> Signature for ($($name,)*)
        where
            $($name: Component,)*
        {
            fn type_ids() -> Box<[TypeId]> {
                Box::from([$(TypeId::of::<$name>()),*])
            }
        }
    };
}

impl_signature!();
impl_signature!(A);
impl_signature!(A, B);
impl_signature!(A, B, C);
impl_signature!(A, B, C, D);
impl_signature!(A, B, C, D, E);
impl_signature!(A, B, C, D, E, F);
impl_signature!(A, B, C, D, E, F, G);
impl_signature!(A, B, C, D, E, F, G, H);
impl_signature!(A, B, C, D, E, F, G, H, I);
impl_signature!(A, B, C, D, E, F, G, H, I, J);
impl_signature!(A, B, C, D, E, F, G, H, I, J, K);
impl_signature!(A, B, C, D, E, F, G, H, I, J, K, L);
