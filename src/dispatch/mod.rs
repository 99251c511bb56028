use crate::errors::DispatchError;
use crate::events::{EventKind, InboundEvent};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use tracing::{debug, info, warn};

/// Callback invoked for one classified webhook event.
///
/// Implemented for any `Fn(InboundEvent) -> impl Future<Output = anyhow::Result<()>>`,
/// so plain async closures can be registered directly.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: InboundEvent) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> EventHandler for F
where
    F: Fn(InboundEvent) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn handle(&self, event: InboundEvent) -> anyhow::Result<()> {
        (self)(event).await
    }
}

/// Routes webhook bodies to the handler registered for their event kind.
///
/// Registration takes `&mut self` and dispatch takes `&self`: register
/// everything at start-up, then share the dispatcher (typically behind an
/// `Arc`) with the HTTP layer. One handler per kind; unhandled kinds are
/// accepted and ignored.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Box<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous handler.
    pub fn register<H>(&mut self, kind: EventKind, handler: H) -> &mut Self
    where
        H: EventHandler + 'static,
    {
        if self.handlers.insert(kind, Box::new(handler)).is_some() {
            info!("{} event handler replaced", kind);
        } else {
            info!("{} event handler has been added", kind);
        }
        self
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Classify `raw_body` and run the matching handler, if any.
    ///
    /// Handler errors are returned as [`DispatchError::Handler`] without
    /// modification.
    pub async fn dispatch(&self, raw_body: Option<Value>) -> Result<(), DispatchError> {
        let event = classify(raw_body)?;
        let kind = event.kind();

        let Some(handler) = self.handlers.get(&kind) else {
            debug!("no event handler registered for event type: {}", kind);
            return Ok(());
        };

        handler.handle(event).await.map_err(DispatchError::Handler)
    }
}

/// Turn a raw webhook body into an [`InboundEvent`].
pub fn classify(raw_body: Option<Value>) -> Result<InboundEvent, DispatchError> {
    let body = match raw_body {
        None | Some(Value::Null) => {
            warn!("empty webhook body");
            return Err(DispatchError::EmptyBody);
        }
        Some(Value::Object(map)) => map,
        Some(other) => {
            warn!("webhook body is not a JSON object: {}", json_type(&other));
            return Err(DispatchError::MissingEventField);
        }
    };
    debug!("webhook body: {:?}", body);

    let Some(tag) = body.get("event") else {
        warn!("webhook body has no event field");
        return Err(DispatchError::MissingEventField);
    };

    let kind = match tag {
        Value::String(s) => s.parse::<EventKind>().ok(),
        _ => None,
    };
    let Some(kind) = kind else {
        let tag = tag.as_str().map_or_else(|| tag.to_string(), str::to_string);
        warn!("invalid event type: {}", tag);
        return Err(DispatchError::UnknownEventType(tag));
    };

    Ok(InboundEvent::new(kind, body))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
