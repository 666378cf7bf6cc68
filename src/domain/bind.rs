//! Typed binding of parsed sections onto caller records.
//!
//! A destination is a two-level record: an outer type implementing [`Bind`]
//! whose members each implement [`BindSection`], and whose members in turn
//! are scalars implementing [`FieldValue`]. The [`ini_record!`] and
//! [`ini_section!`] macros generate both impls from a field → tag table.
//!
//! Missing sections and keys bind as the type's zero value. Members not named
//! in a table are never touched.
//!
//! [`ini_record!`]: crate::ini_record
//! [`ini_section!`]: crate::ini_section

use crate::domain::configuration::{Configuration, Field, Section};

/// A scalar that can be assigned from a raw field value.
///
/// Conversions are best-effort: a value that does not parse assigns the
/// type's zero value instead of failing.
pub trait FieldValue {
    fn assign(&mut self, field: &Field);
}

impl FieldValue for String {
    fn assign(&mut self, field: &Field) {
        self.clear();
        self.push_str(field.as_str());
    }
}

impl FieldValue for i64 {
    fn assign(&mut self, field: &Field) {
        *self = field.as_i64();
    }
}

impl FieldValue for f64 {
    fn assign(&mut self, field: &Field) {
        *self = field.as_f64();
    }
}

impl FieldValue for bool {
    fn assign(&mut self, field: &Field) {
        *self = field.as_bool();
    }
}

macro_rules! parsed_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn assign(&mut self, field: &Field) {
                    *self = field.as_str().parse().unwrap_or_default();
                }
            }
        )*
    };
}

parsed_field_value!(i32, u32, u64, f32);

/// A record populated from the fields of a single section.
pub trait BindSection {
    fn bind_section(&mut self, section: &Section);
}

/// A record whose members are each populated from a named section.
pub trait Bind {
    fn bind(&mut self, config: &Configuration);
}

/// Bind an already parsed configuration onto `dest`.
pub fn bind_config<T: Bind + ?Sized>(config: &Configuration, dest: &mut T) {
    dest.bind(config);
}

#[doc(hidden)]
pub fn bind_field<V: FieldValue + ?Sized>(dest: &mut V, section: &Section, key: &str) {
    let present = section.has_field(key);
    tracing::trace!(section = section.name(), key, present, "binding field");
    dest.assign(section.field(key));
}

#[doc(hidden)]
pub fn bind_nested<S: BindSection + ?Sized>(dest: &mut S, config: &Configuration, name: &str) {
    let present = config.has_section(name);
    tracing::trace!(section = name, present, "binding section");
    dest.bind_section(config.section(name));
}

/// Implement [`BindSection`] for a record by naming the key of each member.
///
/// ```
/// #[derive(Default)]
/// struct Database {
///     user: String,
///     port: i64,
/// }
///
/// inibind::ini_section! {
///     Database {
///         user: "User",
///         port: "Port",
///     }
/// }
/// ```
#[macro_export]
macro_rules! ini_section {
    ($ty:ty { $($member:ident : $key:literal),* $(,)? }) => {
        impl $crate::BindSection for $ty {
            fn bind_section(&mut self, section: &$crate::Section) {
                $( $crate::domain::bind::bind_field(&mut self.$member, section, $key); )*
            }
        }
    };
}

/// Implement [`Bind`] for an outer record by naming the section of each member.
///
/// Every member listed must itself implement [`BindSection`]. A scalar member
/// is rejected at compile time:
///
/// ```compile_fail
/// #[derive(Default)]
/// struct Settings {
///     port: i64,
/// }
///
/// inibind::ini_record! { Settings { port: "db" } }
/// ```
///
/// ```compile_fail
/// #[derive(Default)]
/// struct Settings {
///     name: String,
/// }
///
/// inibind::ini_record! { Settings { name: "person" } }
/// ```
#[macro_export]
macro_rules! ini_record {
    ($ty:ty { $($member:ident : $section:literal),* $(,)? }) => {
        impl $crate::Bind for $ty {
            fn bind(&mut self, config: &$crate::Configuration) {
                $( $crate::domain::bind::bind_nested(&mut self.$member, config, $section); )*
            }
        }
    };
}
