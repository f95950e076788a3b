//! Array normalization.
//!
//! Rewrites a body tree so the renderer only ever sees two shapes: structures
//! (`Shape::Object`) and primitives. Every array node takes over its element's
//! shape, required list and description, and records the nesting in
//! `Field::repeat`. Object keys are rekeyed to their sanitized identifiers on
//! the way down.
//!
//! Running the pass on an already normalized tree changes nothing.
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::field::{Field, Members, Shape};
use crate::ident;

/// Normalize `field` in place.
pub fn normalize(field: &mut Field) -> Result<()> {
    normalize_at(field, "$")
}

/// Consuming convenience over [`normalize`].
pub fn normalized(mut field: Field) -> Result<Field> {
    normalize(&mut field)?;
    Ok(field)
}

fn normalize_at(field: &mut Field, at: &str) -> Result<()> {
    match &mut field.shape {
        Shape::Primitive { .. } => Ok(()),
        Shape::Object(members) => rekey(members, at),
        Shape::Array { items } => {
            let mut item = items
                .take()
                .ok_or_else(|| Error::MissingItems { at: at.to_string() })?;
            // element first, so arrays of arrays hoist a resolved shape
            normalize_at(&mut item, &format!("{at}[]"))?;
            let Field { description, repeat, shape } = *item;
            field.description = description;
            field.repeat = repeat + 1;
            field.shape = shape;
            Ok(())
        }
    }
}

fn rekey(members: &mut Members, at: &str) -> Result<()> {
    let properties = std::mem::take(&mut members.properties);
    // emitted (capitalized) name -> raw key that claimed it
    let mut claimed = HashMap::<String, String>::with_capacity(properties.len());
    for (raw_key, mut child) in properties {
        let key = ident::sanitize(&raw_key)?.to_string();
        let emitted = ident::upper_first(&key);
        if let Some(first) = claimed.insert(emitted.clone(), raw_key.clone()) {
            return Err(Error::DuplicateField {
                at: at.to_string(),
                name: emitted,
                first,
                second: raw_key,
            });
        }
        normalize_at(&mut child, &format!("{at}.{key}"))?;
        members.properties.insert(key, child);
    }
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //
