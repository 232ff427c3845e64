//! Text-producing component variants: literal, translatable and supplied.

use std::rc::Rc;

use super::Node;
use crate::context::{Context, Translator};

/// Fixed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    text: String,
    pub(crate) node: Node,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            node: Node::default(),
        }
    }

    /// The literal text.
    pub fn content(&self) -> &str {
        &self.text
    }
}

/// Text looked up by key through the context's [`Translator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Translatable {
    key: String,
    pub(crate) node: Node,
}

impl Translatable {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            node: Node::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolves the key, falling back to the key itself.
    ///
    /// The key is returned verbatim both when no [`Translator`] is
    /// registered and when the registered one has no entry for it.
    pub fn resolve(&self, context: &Context) -> String {
        context
            .service::<dyn Translator>()
            .and_then(|translator| translator.translate(&self.key))
            .unwrap_or_else(|| self.key.clone())
    }
}

/// The function behind a [`Supplied`] component.
#[derive(Clone)]
pub struct Supplier(Rc<dyn Fn(&Context) -> Option<String>>);

impl Supplier {
    pub fn new(f: impl Fn(&Context) -> Option<String> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, context: &Context) -> Option<String> {
        (self.0)(context)
    }
}

impl std::fmt::Debug for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Supplier(..)")
    }
}

/// Two suppliers are equal only if they share the same function.
impl PartialEq for Supplier {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Text computed from the context each time the component is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplied {
    supplier: Supplier,
    pub(crate) node: Node,
}

impl Supplied {
    pub fn new(f: impl Fn(&Context) -> Option<String> + 'static) -> Self {
        Self {
            supplier: Supplier::new(f),
            node: Node::default(),
        }
    }

    pub fn supply(&self, context: &Context) -> Option<String> {
        self.supplier.call(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Translations;

    #[test]
    fn test_translatable_without_service_falls_back_to_key() {
        let component = Translatable::new("menu.title");
        assert_eq!(component.resolve(&Context::new()), "menu.title");
    }

    #[test]
    fn test_translatable_missing_entry_falls_back_to_key() {
        let context = Context::new().with_service(Translations::new().with("other", "x"));
        assert_eq!(Translatable::new("menu.title").resolve(&context), "menu.title");
    }

    #[test]
    fn test_translatable_resolves_through_service() {
        let context = Context::new().with_service(Translations::new().with("menu.title", "Menu"));
        assert_eq!(Translatable::new("menu.title").resolve(&context), "Menu");
    }

    #[test]
    fn test_supplied_reads_context() {
        let supplied = Supplied::new(|ctx| Some(format!("{} services", ctx.len())));
        let context = Context::new().with_service(Translations::new());
        assert_eq!(supplied.supply(&context).as_deref(), Some("2 services"));
    }

    #[test]
    fn test_supplier_equality_is_identity() {
        let a = Supplier::new(|_| None);
        let b = a.clone();
        let c = Supplier::new(|_| None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
