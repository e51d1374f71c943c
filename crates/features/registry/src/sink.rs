use cptg_domain::Registration;

/// Where replay hands each derived registration.
///
/// The host decides what "registering" means: a route table, a content type
/// catalog, a listing. Replay never performs the side effect itself.
pub trait RegistrationSink {
    fn register(&mut self, registration: Registration);
}

impl RegistrationSink for Vec<Registration> {
    fn register(&mut self, registration: Registration) {
        self.push(registration);
    }
}

impl<S: RegistrationSink + ?Sized> RegistrationSink for &mut S {
    fn register(&mut self, registration: Registration) {
        (**self).register(registration);
    }
}

/// A sink that calls a closure for every registration.
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

impl<F: FnMut(Registration)> RegistrationSink for FnSink<F> {
    fn register(&mut self, registration: Registration) {
        (self.0)(registration);
    }
}

/// Wraps a closure as a [`RegistrationSink`].
///
/// ```rust
/// use cptg_registry::sink_fn;
///
/// let mut seen = Vec::new();
/// let mut sink = sink_fn(|r: cptg_domain::Registration| seen.push(r.type_key));
/// # let _ = &mut sink;
/// ```
pub const fn sink_fn<F: FnMut(Registration)>(f: F) -> FnSink<F> {
    FnSink(f)
}
