//! Variable reference tokens for prompt text.
//!
//! Prompts refer to live simulation state with tokens of the form
//! `{{ namespace.field }}`. The external runner resolves them; this module
//! only formats them. Tokens are not checked against the declared schema.

use crate::model::{StateField, StateSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three state namespaces a prompt can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Meta,
    Public,
    Private,
}

impl Namespace {
    /// All namespaces, in schema order.
    pub const ALL: [Namespace; 3] = [Namespace::Meta, Namespace::Public, Namespace::Private];

    /// Parse a namespace tag (`meta`, `public`, `private`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "meta" => Some(Self::Meta),
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// The prefix used inside reference tokens.
    pub fn token_prefix(self) -> &'static str {
        match self {
            Namespace::Meta => "meta",
            Namespace::Public => "public_information",
            Namespace::Private => "private_information",
        }
    }

    /// The key of this namespace's section in the compiled `state` block.
    pub fn section_key(self) -> &'static str {
        match self {
            Namespace::Meta => "meta_information",
            Namespace::Public => "public_information",
            Namespace::Private => "private_information",
        }
    }

    /// The fields declared in this namespace.
    pub fn fields(self, schema: &StateSchema) -> &[StateField] {
        match self {
            Namespace::Meta => &schema.meta_information,
            Namespace::Public => &schema.public_information,
            Namespace::Private => &schema.private_information,
        }
    }

    /// Format the reference token for `field` in this namespace.
    ///
    /// ```text
    /// meta    -> {{ meta.game_id }}
    /// public  -> {{ public_information.price }}
    /// private -> {{ private_information.balance }}
    /// ```
    pub fn token(self, field: &str) -> String {
        format!("{{{{ {}.{} }}}}", self.token_prefix(), field)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Meta => write!(f, "meta"),
            Namespace::Public => write!(f, "public"),
            Namespace::Private => write!(f, "private"),
        }
    }
}

/// A "click to insert" affordance for one declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    pub namespace: Namespace,
    pub field: String,
    pub token: String,
}

/// Every field in the schema paired with its reference token, in schema order.
pub fn references(schema: &StateSchema) -> Vec<VariableReference> {
    Namespace::ALL
        .iter()
        .flat_map(|&namespace| {
            namespace.fields(schema).iter().map(move |f| VariableReference {
                namespace,
                field: f.name.clone(),
                token: namespace.token(&f.name),
            })
        })
        .collect()
}
