// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code generation macro for the 0-based index newtypes. See
//! [`crate::generate_index_type_impl!`].

/// Generates the common implementation for an index-like newtype over `usize`.
///
/// # Parameters
/// - `$idx_ty`: The index type being implemented (e.g. [`RowIndex`], [`ColIndex`],
///   [`ByteIndex`])
/// - `$constr_fn`: Constructor function name (e.g. `row`, `col`, `byte_index`)
///
/// # Generated Code
/// - Constructor helper function (`row()`, `col()`, `byte_index()`)
/// - [`Debug`] and [`Display`] implementations
/// - Core methods: `new()`, `as_usize()`
/// - [`From`] implementations for `usize` and `i32` (negative values clamp to 0), and
///   back to `usize`
/// - [`Deref`] and [`DerefMut`] to `usize`
/// - Saturating [`Add`], [`AddAssign`], [`Sub`], [`SubAssign`] for `Self` and `usize`
///
/// [`RowIndex`]: crate::RowIndex
/// [`ColIndex`]: crate::ColIndex
/// [`ByteIndex`]: crate::ByteIndex
/// [`Debug`]: ::std::fmt::Debug
/// [`Display`]: ::std::fmt::Display
/// [`From`]: ::std::convert::From
/// [`Deref`]: ::std::ops::Deref
/// [`DerefMut`]: ::std::ops::DerefMut
/// [`Add`]: ::std::ops::Add
/// [`AddAssign`]: ::std::ops::AddAssign
/// [`Sub`]: ::std::ops::Sub
/// [`SubAssign`]: ::std::ops::SubAssign
#[macro_export]
macro_rules! generate_index_type_impl {
    (
        /* Make this */ $idx_ty:ident,
        /* Make this */ $constr_fn:ident
    ) => {
        #[doc = concat!("Creates a new [`", stringify!($idx_ty), "`] from any type that can be converted into it.")]
        pub fn $constr_fn(arg_index: impl Into<$idx_ty>) -> $idx_ty {
            arg_index.into()
        }

        impl ::std::fmt::Debug for $idx_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({:?})", stringify!($idx_ty), self.0)
            }
        }

        impl ::std::fmt::Display for $idx_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        mod impl_core {
            #![allow(clippy::wildcard_imports)]
            use super::*;

            impl $idx_ty {
                pub fn new(arg_index: impl Into<$idx_ty>) -> Self { arg_index.into() }

                #[must_use]
                pub fn as_usize(&self) -> usize { self.0 }
            }
        }

        mod impl_from_numeric {
            #![allow(clippy::wildcard_imports)]
            use super::*;

            impl From<usize> for $idx_ty {
                fn from(val: usize) -> Self { $idx_ty(val) }
            }

            impl From<$idx_ty> for usize {
                fn from(index: $idx_ty) -> Self { index.0 }
            }

            impl From<i32> for $idx_ty {
                fn from(val: i32) -> Self { $idx_ty(usize::try_from(val).unwrap_or(0)) }
            }
        }

        mod impl_deref {
            #![allow(clippy::wildcard_imports)]
            use super::*;

            impl ::std::ops::Deref for $idx_ty {
                type Target = usize;

                fn deref(&self) -> &Self::Target { &self.0 }
            }

            impl ::std::ops::DerefMut for $idx_ty {
                fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
            }
        }

        mod index_arithmetic_operators {
            #![allow(clippy::wildcard_imports)]
            use super::*;

            impl ::std::ops::Add<$idx_ty> for $idx_ty {
                type Output = $idx_ty;

                fn add(self, rhs: $idx_ty) -> Self::Output {
                    $idx_ty(self.0.saturating_add(rhs.0))
                }
            }

            impl ::std::ops::AddAssign<$idx_ty> for $idx_ty {
                fn add_assign(&mut self, rhs: $idx_ty) { *self = *self + rhs; }
            }

            impl ::std::ops::Sub<$idx_ty> for $idx_ty {
                type Output = $idx_ty;

                fn sub(self, rhs: $idx_ty) -> Self::Output {
                    $idx_ty(self.0.saturating_sub(rhs.0))
                }
            }

            impl ::std::ops::SubAssign<$idx_ty> for $idx_ty {
                fn sub_assign(&mut self, rhs: $idx_ty) { *self = *self - rhs; }
            }

            impl ::std::ops::Add<usize> for $idx_ty {
                type Output = $idx_ty;

                fn add(self, rhs: usize) -> Self::Output {
                    $idx_ty(self.0.saturating_add(rhs))
                }
            }

            impl ::std::ops::AddAssign<usize> for $idx_ty {
                fn add_assign(&mut self, rhs: usize) { *self = *self + rhs; }
            }

            impl ::std::ops::Sub<usize> for $idx_ty {
                type Output = $idx_ty;

                fn sub(self, rhs: usize) -> Self::Output {
                    $idx_ty(self.0.saturating_sub(rhs))
                }
            }

            impl ::std::ops::SubAssign<usize> for $idx_ty {
                fn sub_assign(&mut self, rhs: usize) { *self = *self - rhs; }
            }
        }
    };
}
