//! Service registry consulted by components while they produce text.
//!
//! A [`Context`] maps capability types to service instances. A service is
//! registered once under its concrete type and, through [`Service::provide`],
//! under every capability trait it wants to be found by. Lookups that find
//! nothing return `None`; callers pick their own fallback.
//!
//! # Example
//!
//! ```rust
//! use glint_text::{Context, Translations, Translator};
//!
//! let mut context = Context::new();
//! context.add_service(Translations::new().with("greeting", "Hello"));
//!
//! // Found by capability...
//! let translator = context.service::<dyn Translator>().unwrap();
//! assert_eq!(translator.translate("greeting").as_deref(), Some("Hello"));
//!
//! // ...and by concrete type.
//! assert!(context.service::<Translations>().is_some());
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

/// A value that can be registered in a [`Context`].
///
/// Implementors expose themselves as capability trait objects from
/// [`provide`](Self::provide). The default implementation exposes nothing
/// beyond the concrete type.
///
/// ```rust
/// use std::rc::Rc;
/// use glint_text::{Provider, Service, Translator};
///
/// struct Upper;
///
/// impl Translator for Upper {
///     fn translate(&self, key: &str) -> Option<String> {
///         Some(key.to_uppercase())
///     }
/// }
///
/// impl Service for Upper {
///     fn provide(self: Rc<Self>, provider: &mut Provider<'_>) {
///         provider.provide::<dyn Translator>(self);
///     }
/// }
/// ```
pub trait Service: 'static {
    fn provide(self: Rc<Self>, provider: &mut Provider<'_>) {
        let _ = provider;
    }
}

/// Registration handle passed to [`Service::provide`].
pub struct Provider<'c> {
    services: &'c mut HashMap<TypeId, Box<dyn Any>>,
}

impl Provider<'_> {
    /// Registers `service` under the capability type `T`.
    pub fn provide<T: ?Sized + 'static>(&mut self, service: Rc<T>) -> &mut Self {
        log::trace!("registering capability {}", std::any::type_name::<T>());
        self.services.insert(TypeId::of::<T>(), Box::new(service));
        self
    }
}

/// A keyed registry of services available while text is produced.
#[derive(Default)]
pub struct Context {
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a service under its concrete type and every capability it provides.
    ///
    /// A later registration for the same type or capability replaces the
    /// earlier one.
    pub fn add_service<S: Service>(&mut self, service: S) -> &mut Self {
        let service = Rc::new(service);
        let mut provider = Provider {
            services: &mut self.services,
        };
        provider.provide::<S>(Rc::clone(&service));
        service.provide(&mut provider);
        self
    }

    /// Builder form of [`add_service`](Self::add_service).
    pub fn with_service<S: Service>(mut self, service: S) -> Self {
        self.add_service(service);
        self
    }

    /// Looks up the service registered under `T`.
    pub fn service<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Rc<T>>())
            .cloned()
    }

    /// Returns `true` if something is registered under `T`.
    pub fn has_service<T: ?Sized + 'static>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("services", &self.services.len())
            .finish()
    }
}

/// Capability resolving translation keys to display text.
pub trait Translator {
    /// Returns the translation for `key`, or `None` when it has none.
    fn translate(&self, key: &str) -> Option<String>;
}

/// A [`Translator`] backed by an in-memory key to text map.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, returning the updated map for chaining.
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Translations {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Translator for Translations {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl Service for Translations {
    fn provide(self: Rc<Self>, provider: &mut Provider<'_>) {
        provider.provide::<dyn Translator>(self);
    }
}
