// ShaderBG
// Copyright (c) 2025 Harlen Batagelo
// https://github.com/hbatagelo/shaderbg
// SPDX-License-Identifier: GPL-3.0-or-later

use num_traits::AsPrimitive;
use std::fmt;

/// Generates a fixed-size vector type with `N` components of type `T`.
///
/// Each generated type gets a constructor, per-component accessors,
/// an explicit component-wise conversion (`cast`) and conversions
/// to and from plain arrays, which is the layout GL expects.
macro_rules! impl_vector {
    ($name:ident, $debug_name:literal, $n:literal, $($field:ident: $index:tt),+) => {
        #[derive(Default, Copy, Clone, PartialEq)]
        pub struct $name<T> {
            $($field: T,)+
        }

        impl<T> $name<T>
        where
            T: Copy,
        {
            pub fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            $(
                pub fn $field(&self) -> T {
                    self.$field
                }
            )+

            pub fn to_array(&self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Converts every component with an `as` cast.
            pub fn cast<U>(&self) -> $name<U>
            where
                T: AsPrimitive<U>,
                U: Copy + 'static,
            {
                $name::<U>::new($(self.$field.as_()),+)
            }
        }

        impl<T> From<[T; $n]> for $name<T>
        where
            T: Copy,
        {
            fn from(components: [T; $n]) -> Self {
                Self::new($(components[$index]),+)
            }
        }

        impl<T> From<$name<T>> for [T; $n]
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T> fmt::Debug for $name<T>
        where
            T: Copy + fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct($debug_name)
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }
    };
}

impl_vector!(Vector2, "Vector2", 2, x: 0, y: 1);
impl_vector!(Vector3, "Vector3", 3, x: 0, y: 1, z: 2);
impl_vector!(Vector4, "Vector4", 4, x: 0, y: 1, z: 2, w: 3);

impl<T> From<(T, T)> for Vector2<T>
where
    T: Copy,
{
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T, T)> for Vector3<T>
where
    T: Copy,
{
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T, T)> for Vector4<T>
where
    T: Copy,
{
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}
