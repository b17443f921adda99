//! `envoy.type.tracing.v3` span tag messages

use prost::Message;

/// A custom tag applied to traced spans.
#[derive(Clone, PartialEq, Message)]
pub struct CustomTag {
    /// Tag key.
    #[prost(string, tag = "1")]
    pub tag: String,

    /// Value source; exactly one is set.
    #[prost(oneof = "custom_tag::Type", tags = "2, 3, 4")]
    pub r#type: ::core::option::Option<custom_tag::Type>,
}

/// Nested message and enum types in `CustomTag`.
pub mod custom_tag {
    use prost::{Message, Oneof};

    /// A fixed tag value.
    #[derive(Clone, PartialEq, Message)]
    pub struct Literal {
        #[prost(string, tag = "1")]
        pub value: String,
    }

    /// A tag value read from a process environment variable.
    #[derive(Clone, PartialEq, Message)]
    pub struct Environment {
        /// Environment variable name.
        #[prost(string, tag = "1")]
        pub name: String,
        /// Value used when the variable is unset.
        #[prost(string, tag = "2")]
        pub default_value: String,
    }

    /// A tag value read from an inbound request header.
    #[derive(Clone, PartialEq, Message)]
    pub struct Header {
        /// Header name.
        #[prost(string, tag = "1")]
        pub name: String,
        /// Value used when the header is absent.
        #[prost(string, tag = "2")]
        pub default_value: String,
    }

    #[derive(Clone, PartialEq, Oneof)]
    pub enum Type {
        #[prost(message, tag = "2")]
        Literal(Literal),
        #[prost(message, tag = "3")]
        Environment(Environment),
        #[prost(message, tag = "4")]
        RequestHeader(Header),
    }
}
