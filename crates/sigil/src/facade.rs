//! The async facade and its namespaces.

use futures::future::join_all;
use sigil_config::{Config, DispatchMode, DispatchSection};
use sigil_crypto::auth::MAC_LEN;
use sigil_crypto::primitives::{SHA256_LEN, SHA512_LEN};
use sigil_crypto::util::HASH_LEN;
use sigil_crypto::{
    Authenticated, Hashed, Invocation, MacKey, Message, Operation, OperationResult, Output,
    SecretKey, Signed, alt, auth, util,
};

use crate::dispatch::Dispatcher;
use crate::request::{Request, Response};

/// Entry point to every operation.
///
/// Cheap to clone; clones share the in-flight limit.
///
/// ```rust
/// use sigil::{Message, Sigil};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let sigil = Sigil::new();
/// let out = sigil.util().hash(Message::from(b"abc")).await.unwrap();
/// assert_eq!(out.hash.len(), 48);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Sigil {
    dispatcher: Dispatcher,
}

impl Default for Sigil {
    fn default() -> Self {
        Self::new()
    }
}

impl Sigil {
    /// Facade with default dispatch settings (inline, 256 in flight).
    #[must_use]
    pub fn new() -> Self {
        Self::with_dispatch(&DispatchSection::default())
    }

    /// Facade configured from a loaded [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_dispatch(&config.dispatch)
    }

    /// Facade with explicit dispatch settings.
    #[must_use]
    pub fn with_dispatch(section: &DispatchSection) -> Self {
        Self {
            dispatcher: Dispatcher::new(section),
        }
    }

    /// Where operation work runs.
    #[must_use]
    pub fn mode(&self) -> DispatchMode {
        self.dispatcher.mode()
    }

    /// Maximum operations computing at once.
    #[must_use]
    pub fn max_in_flight(&self) -> usize {
        self.dispatcher.max_in_flight()
    }

    /// `auth.*` operations.
    #[must_use]
    pub fn auth(&self) -> Auth<'_> {
        Auth { sigil: self }
    }

    /// `util.*` operations.
    #[must_use]
    pub fn util(&self) -> Util<'_> {
        Util { sigil: self }
    }

    /// `alt.*` operations.
    #[must_use]
    pub fn alt(&self) -> Alt<'_> {
        Alt { sigil: self }
    }

    /// Validate and run a dynamic request.
    ///
    /// Arguments are validated before dispatch so the span carries the
    /// message length. A request that fails validation is still dispatched
    /// as a failed call.
    ///
    /// # Errors
    ///
    /// Any [`OperationError`](sigil_crypto::OperationError) the operation
    /// produces.
    pub async fn call(&self, request: Request) -> OperationResult<Output> {
        let Request {
            operation,
            arguments,
        } = request;
        match Invocation::prepare(operation, arguments) {
            Ok(invocation) => {
                let message_len = invocation.message_len();
                self.dispatcher
                    .run(operation, Some(message_len), move || invocation.run())
                    .await
            },
            Err(err) => self.dispatcher.run(operation, None, move || Err(err)).await,
        }
    }

    /// Run a batch of requests concurrently.
    ///
    /// Results come back in request order.
    pub async fn call_many<I>(&self, requests: I) -> Vec<OperationResult<Output>>
    where
        I: IntoIterator<Item = Request>,
    {
        join_all(requests.into_iter().map(|request| self.call(request))).await
    }

    /// Parse a JSON request, run it, and shape the outcome.
    pub async fn respond(&self, json: &str) -> Response {
        match Request::from_json(json) {
            Ok(request) => Response::from(self.call(request).await),
            Err(err) => Response::from(Err(err)),
        }
    }
}

/// Primary authentication namespace.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    sigil: &'a Sigil,
}

impl Auth<'_> {
    /// `auth.sign`: Ed25519 detached signature.
    ///
    /// # Errors
    ///
    /// Primitive failure if a 64-byte key's halves disagree.
    pub async fn sign(&self, message: Message, key: SecretKey) -> OperationResult<Signed> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::Sign, Some(len), move || auth::sign(&message, &key))
            .await
    }

    /// `auth.mac`: HMAC-SHA-384.
    ///
    /// # Errors
    ///
    /// Primitive failure if the binding rejects the key.
    pub async fn mac(
        &self,
        message: Message,
        key: MacKey,
    ) -> OperationResult<Authenticated<MAC_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::Mac, Some(len), move || auth::mac(&message, &key))
            .await
    }
}

/// Primary utility namespace.
#[derive(Debug, Clone, Copy)]
pub struct Util<'a> {
    sigil: &'a Sigil,
}

impl Util<'_> {
    /// `util.hash`: SHA-384.
    ///
    /// # Errors
    ///
    /// Only if the dispatched computation fails to complete.
    pub async fn hash(&self, message: Message) -> OperationResult<Hashed<HASH_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::Hash, Some(len), move || util::hash(&message))
            .await
    }
}

/// Alternate namespace.
#[derive(Debug, Clone, Copy)]
pub struct Alt<'a> {
    sigil: &'a Sigil,
}

impl<'a> Alt<'a> {
    /// `alt.auth.*` operations.
    #[must_use]
    pub fn auth(&self) -> AltAuth<'a> {
        AltAuth { sigil: self.sigil }
    }

    /// `alt.util.*` operations.
    #[must_use]
    pub fn util(&self) -> AltUtil<'a> {
        AltUtil { sigil: self.sigil }
    }
}

/// Alternate authentication namespace.
#[derive(Debug, Clone, Copy)]
pub struct AltAuth<'a> {
    sigil: &'a Sigil,
}

impl AltAuth<'_> {
    /// `alt.auth.hmacsha256`
    ///
    /// # Errors
    ///
    /// Primitive failure if the binding rejects the key.
    pub async fn hmacsha256(
        &self,
        message: Message,
        key: MacKey,
    ) -> OperationResult<Authenticated<SHA256_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::HmacSha256, Some(len), move || {
                alt::auth::hmacsha256(&message, &key)
            })
            .await
    }

    /// `alt.auth.hmacsha512`
    ///
    /// # Errors
    ///
    /// Primitive failure if the binding rejects the key.
    pub async fn hmacsha512(
        &self,
        message: Message,
        key: MacKey,
    ) -> OperationResult<Authenticated<SHA512_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::HmacSha512, Some(len), move || {
                alt::auth::hmacsha512(&message, &key)
            })
            .await
    }
}

/// Alternate utility namespace.
#[derive(Debug, Clone, Copy)]
pub struct AltUtil<'a> {
    sigil: &'a Sigil,
}

impl AltUtil<'_> {
    /// `alt.util.sha256`
    ///
    /// # Errors
    ///
    /// Only if the dispatched computation fails to complete.
    pub async fn sha256(&self, message: Message) -> OperationResult<Hashed<SHA256_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::Sha256, Some(len), move || alt::util::sha256(&message))
            .await
    }

    /// `alt.util.sha512`
    ///
    /// # Errors
    ///
    /// Only if the dispatched computation fails to complete.
    pub async fn sha512(&self, message: Message) -> OperationResult<Hashed<SHA512_LEN>> {
        let len = message.len();
        self.sigil
            .dispatcher
            .run(Operation::Sha512, Some(len), move || alt::util::sha512(&message))
            .await
    }
}
