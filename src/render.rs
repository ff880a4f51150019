//! String rendering and keyed-map conversion.
//!
//! Elements are rendered through [`Display`]. Two conversions are built on
//! top of that:
//!
//! - [`join`]: renderings separated by [`SEPARATOR`], no trailing separator
//! - [`to_keyed_map`]: a map from rendering to element, last write wins
//!
//! A failing `Display` implementation aborts the whole conversion with a
//! [`ConversionError`]; no partial string or map is returned.
//!
//! # Examples
//!
//! ```rust
//! use conveyor::render::{join, to_keyed_map};
//!
//! let words = ["a", "b", "a"];
//! assert_eq!(join(&words).unwrap(), "a, b, a");
//!
//! let map = to_keyed_map(&words).unwrap();
//! assert_eq!(map.len(), 2);
//! ```

use std::fmt::{self, Display, Write as _};

use crate::error::ConversionError;
use crate::hashing::{self, HashMap};

/// Separator placed between renderings by [`join`].
pub const SEPARATOR: &str = ", ";

/// Map from an element's string rendering to the element.
pub type KeyedMap<T> = HashMap<String, T>;

/// Renders a single element into a fresh `String`.
///
/// Unlike [`ToString::to_string`], a failing `Display` implementation is
/// reported as an error instead of a panic.
///
/// # Errors
///
/// Returns the formatter error produced by `element`.
pub fn render<T: Display + ?Sized>(element: &T) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    write!(buffer, "{element}")?;
    Ok(buffer)
}

/// Joins the renderings of `elements` with [`SEPARATOR`].
///
/// An empty input yields an empty string.
///
/// # Errors
///
/// Returns [`ConversionError::Render`] for the first element that fails to
/// render.
pub fn join<'a, T, I>(elements: I) -> Result<String, ConversionError>
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut buffer = String::new();
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            buffer.push_str(SEPARATOR);
        }
        write!(buffer, "{element}").map_err(|source| ConversionError::Render { index, source })?;
    }
    Ok(buffer)
}

/// Builds a [`KeyedMap`] keyed by each element's rendering.
///
/// Elements with identical renderings collapse into one entry holding the
/// last of them.
///
/// # Errors
///
/// Returns [`ConversionError::Render`] for the first element that fails to
/// render.
pub fn to_keyed_map<'a, T, I>(elements: I) -> Result<KeyedMap<T>, ConversionError>
where
    T: Display + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let iterator = elements.into_iter();
    let mut map = hashing::hash_map_with_capacity(iterator.size_hint().0);
    for (index, element) in iterator.enumerate() {
        let key = render(element).map_err(|source| ConversionError::Render { index, source })?;
        map.insert(key, element.clone());
    }
    Ok(map)
}
