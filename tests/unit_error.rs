//! Unit tests for FactoryError display and cause chaining.

use std::error::Error;

use typed_factories::{
    diagnose, ConstructorMismatch, ConstructorSpec, FactoryError, MethodDescriptor,
    ResolveFailure, TargetManifest,
};

trait Product {}
struct Concrete;

#[test]
fn test_unsupported_return_display() {
    let error = FactoryError::UnsupportedReturn {
        contract: "dyn app::WidgetFactory",
        method: "create",
        declared: "app::TextWidget",
    };
    assert_eq!(
        error.to_string(),
        "factory method dyn app::WidgetFactory::create must declare a contract return type, \
         not app::TextWidget"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_contract_mismatch_display() {
    let error = FactoryError::ContractMismatch {
        target: "app::TextWidget",
        declared: "dyn app::Button",
    };
    assert_eq!(
        error.to_string(),
        "concrete type app::TextWidget does not implement the factory method return type \
         dyn app::Button"
    );
}

#[test]
fn test_unknown_method_display() {
    let error = FactoryError::UnknownMethod { contract: "dyn app::WidgetFactory", method: "make" };
    assert_eq!(error.to_string(), "no method make on factory contract dyn app::WidgetFactory");
}

#[test]
fn test_arity_mismatch_display() {
    let error = FactoryError::ArityMismatch {
        contract: "dyn app::WidgetFactory",
        method: "create",
        expected: 2,
        supplied: 1,
    };
    assert_eq!(
        error.to_string(),
        "dyn app::WidgetFactory::create takes 2 argument(s), 1 supplied"
    );
}

#[test]
fn test_construction_display_and_source() {
    let error = FactoryError::Construction {
        target: "app::TextWidget",
        source: "boom".into(),
    };
    assert_eq!(
        error.to_string(),
        "constructor of app::TextWidget failed; see the error source for the cause"
    );
    assert_eq!(error.source().unwrap().to_string(), "boom");
}

#[test]
fn test_unresolved_display_and_source() {
    let error = FactoryError::Unresolved {
        target: "app::TextWidget",
        failure: ResolveFailure::NotFound("app::TextWidget"),
    };
    assert_eq!(
        error.to_string(),
        "resolution of app::TextWidget failed: no registration for app::TextWidget"
    );
    // The chained source is the container failure itself.
    assert!(error.source().unwrap().to_string().contains("no registration"));
}

#[test]
fn test_resolve_failure_display() {
    assert_eq!(
        ResolveFailure::Binding("no value for parameter label".into()).to_string(),
        "binding failure: no value for parameter label"
    );
    assert_eq!(
        ResolveFailure::Construction("boom".into()).to_string(),
        "construction failure: boom"
    );
    assert_eq!(
        ResolveFailure::NotFound("app::TextWidget").to_string(),
        "no registration for app::TextWidget"
    );
}

#[test]
fn test_resolve_failure_sources() {
    assert!(ResolveFailure::Binding("x".into()).source().is_some());
    assert!(ResolveFailure::Construction("x".into()).source().is_some());
    assert!(ResolveFailure::NotFound("x").source().is_none());
}

#[test]
fn test_constructor_mismatch_carries_the_report() {
    let method = MethodDescriptor::single::<dyn Product>("create")
        .param::<String>("label")
        .param::<u32>("width");
    let target = TargetManifest::of::<Concrete>()
        .constructor(ConstructorSpec::new().param::<String>("title").param::<u32>("width"));
    let report = diagnose(&method, &target).unwrap();

    let mismatch = ConstructorMismatch::new(
        "dyn app::WidgetFactory",
        "app::TextWidget",
        report,
        "no value for parameter title".into(),
    );
    assert_eq!(mismatch.unmatched_names(), ["label"]);
    assert_eq!(mismatch.unmatched().len(), 1);
    assert!(mismatch.constructor().has_param("title"));

    let error = FactoryError::ConstructorMismatch(mismatch);
    let message = error.to_string();
    assert!(message.contains("dyn app::WidgetFactory"));
    assert!(message.contains("app::TextWidget"));
    assert!(message.contains("missing in the constructor: label"));
    assert!(error.source().is_some());
}
