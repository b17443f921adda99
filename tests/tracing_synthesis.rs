//! End-to-end tracing synthesis tests
//!
//! These tests pin the exact wire form of the synthesized tracing resource,
//! byte-exact provider payload included: the proxy parses that payload
//! against its own schema, so any drift here is a proxy-side rejection in
//! production.

use std::time::Duration;

use gantry_xds::synth::tracing::tracing_config;
use gantry_xds::xds::core::grpc_service::{EnvoyGrpc, TargetSpecifier};
use gantry_xds::xds::core::GrpcService;
use gantry_xds::xds::hcm::http_connection_manager::Tracing;
use gantry_xds::xds::tags;
use gantry_xds::xds::trace::tracing::http::ConfigType;
use gantry_xds::xds::trace::tracing::Http;
use gantry_xds::xds::trace::OpenTelemetryConfig;
use gantry_xds::xds::types::Percent;
use gantry_xds::{CustomTag, CustomTagKind, NamespacedName, TimeoutPolicy, TracingConfig};
use prost::Message;

fn collector_config() -> TracingConfig {
    TracingConfig {
        extension_service: NamespacedName::new("projectcontour", "otel-collector"),
        service_name: "gantry".to_string(),
        sni: "some-server.com".to_string(),
        timeout: TimeoutPolicy::Duration(Duration::from_secs(5)),
        overall_sampling: 100.0,
        max_path_tag_length: 256,
        custom_tags: vec![
            CustomTag {
                tag_name: "literal".to_string(),
                kind: CustomTagKind::Literal {
                    value: "this is literal".to_string(),
                },
            },
            CustomTag {
                tag_name: "environmentName".to_string(),
                kind: CustomTagKind::Environment {
                    name: "HOST".to_string(),
                },
            },
            CustomTag {
                tag_name: "requestHeaderName".to_string(),
                kind: CustomTagKind::RequestHeader {
                    header_name: ":path".to_string(),
                    default_value: None,
                },
            },
        ],
    }
}

fn expected_provider(authority: &str) -> Http {
    let payload = OpenTelemetryConfig {
        grpc_service: Some(GrpcService {
            target_specifier: Some(TargetSpecifier::EnvoyGrpc(EnvoyGrpc {
                cluster_name: "extension/projectcontour/otel-collector".to_string(),
                authority: authority.to_string(),
            })),
            timeout: Some(prost_types::Duration {
                seconds: 5,
                nanos: 0,
            }),
        }),
        service_name: "gantry".to_string(),
    };
    Http {
        name: "envoy.tracers.opentelemetry".to_string(),
        config_type: Some(ConfigType::TypedConfig(prost_types::Any {
            type_url: "type.googleapis.com/envoy.config.trace.v3.OpenTelemetryConfig"
                .to_string(),
            value: payload.encode_to_vec(),
        })),
    }
}

#[test]
fn nil_config_synthesizes_nothing() {
    assert_eq!(tracing_config(None), None);
}

#[test]
fn full_config() {
    let got = tracing_config(Some(&collector_config()));

    let want = Tracing {
        overall_sampling: Some(Percent { value: 100.0 }),
        max_path_tag_length: Some(256),
        custom_tags: vec![
            tags::CustomTag {
                tag: "literal".to_string(),
                r#type: Some(tags::custom_tag::Type::Literal(tags::custom_tag::Literal {
                    value: "this is literal".to_string(),
                })),
            },
            tags::CustomTag {
                tag: "environmentName".to_string(),
                r#type: Some(tags::custom_tag::Type::Environment(
                    tags::custom_tag::Environment {
                        name: "HOST".to_string(),
                        default_value: String::new(),
                    },
                )),
            },
            tags::CustomTag {
                tag: "requestHeaderName".to_string(),
                r#type: Some(tags::custom_tag::Type::RequestHeader(
                    tags::custom_tag::Header {
                        name: ":path".to_string(),
                        default_value: String::new(),
                    },
                )),
            },
        ],
        provider: Some(expected_provider("some-server.com")),
    };

    assert_eq!(got, Some(want));
}

#[test]
fn no_custom_tags() {
    let mut config = collector_config();
    config.custom_tags = Vec::new();

    let got = tracing_config(Some(&config));

    let want = Tracing {
        overall_sampling: Some(Percent { value: 100.0 }),
        max_path_tag_length: Some(256),
        custom_tags: Vec::new(),
        provider: Some(expected_provider("some-server.com")),
    };

    assert_eq!(got, Some(want));
}

#[test]
fn no_sni_falls_back_to_extension_authority() {
    let mut config = collector_config();
    config.sni = String::new();
    config.custom_tags = Vec::new();

    let got = tracing_config(Some(&config));

    let want = Tracing {
        overall_sampling: Some(Percent { value: 100.0 }),
        max_path_tag_length: Some(256),
        custom_tags: Vec::new(),
        provider: Some(expected_provider("extension.projectcontour.otel-collector")),
    };

    assert_eq!(got, Some(want));
}

#[test]
fn provider_payload_round_trips_through_the_envelope() {
    let got = tracing_config(Some(&collector_config())).unwrap();

    let Some(ConfigType::TypedConfig(any)) = got.provider.unwrap().config_type else {
        panic!("provider must carry a typed payload");
    };
    let payload: OpenTelemetryConfig = any.to_msg().expect("payload must decode");

    assert_eq!(payload.service_name, "gantry");
    let Some(TargetSpecifier::EnvoyGrpc(target)) =
        payload.grpc_service.and_then(|s| s.target_specifier)
    else {
        panic!("payload must target an upstream cluster");
    };
    assert_eq!(target.cluster_name, "extension/projectcontour/otel-collector");
    assert_eq!(target.authority, "some-server.com");
}
