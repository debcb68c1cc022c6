//! Path identities for tree positions.
//!
//! An identity is the parent's identity plus `/` plus the property name,
//! starting from a root supplied by the caller. Identities depend only on the
//! property-name path, never on value content, so disclosure state is keyed by
//! position.
//!
//! Property names are not escaped: a name containing `/` produces the same
//! identity as the equivalent nested path.

/// Separator placed between a parent identity and a property name.
pub const SEPARATOR: char = '/';

/// Derive the identity of property `name` under `parent`.
///
/// # Examples
///
/// ```
/// use datatree_core::child_id;
///
/// assert_eq!(child_id("root", "p"), "root/p");
/// assert_eq!(child_id("root/p", "0"), "root/p/0");
/// ```
pub fn child_id(parent: &str, name: &str) -> String {
    let mut id = String::with_capacity(parent.len() + name.len() + 1);
    id.push_str(parent);
    id.push(SEPARATOR);
    id.push_str(name);
    id
}
