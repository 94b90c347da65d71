//! Static names of the remote services and their methods.
//!
//! A [`MethodDescriptor`] carries its request and response types as type
//! parameters, so handing a stub the wrong request type does not compile:
//!
//! ```compile_fail
//! use zemberek::proto::WordRequest;
//! use zemberek::services::langid::LanguageIdClient;
//! use zemberek::dispatch::GrpcDispatcher;
//!
//! fn misuse(client: &LanguageIdClient<GrpcDispatcher>) {
//!     let _ = client.detect(WordRequest::new("kavanozun"));
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::services::{analysis, langid, morphology, normalization, preprocessing};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: &'static str,
    pub methods: &'static [&'static str],
}

impl ServiceDescriptor {
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.contains(&method)
    }

    /// The fully-qualified path of `method`, if this service declares it.
    pub fn path(&self, method: &str) -> Option<String> {
        if self.has_method(method) {
            Some(format!("/{}/{}", self.name, method))
        } else {
            None
        }
    }
}

/// One remote operation: where it lives and which messages it exchanges.
pub struct MethodDescriptor<Req, Res> {
    service: &'static str,
    method: &'static str,
    path: &'static str,
    _messages: PhantomData<fn(Req) -> Res>,
}

impl<Req, Res> MethodDescriptor<Req, Res> {
    pub(crate) const fn new(
        service: &'static str,
        method: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            service,
            method,
            path,
            _messages: PhantomData,
        }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl<Req, Res> Clone for MethodDescriptor<Req, Res> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Res> Copy for MethodDescriptor<Req, Res> {}

impl<Req, Res> fmt::Debug for MethodDescriptor<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("path", &self.path)
            .finish()
    }
}

macro_rules! method {
    ($service:literal, $method:literal) => {
        $crate::descriptor::MethodDescriptor::new(
            $service,
            $method,
            concat!("/", $service, "/", $method),
        )
    };
}

pub(crate) use method;

pub const SERVICES: [ServiceDescriptor; 5] = [
    langid::SERVICE,
    normalization::SERVICE,
    preprocessing::SERVICE,
    analysis::SERVICE,
    morphology::SERVICE,
];
