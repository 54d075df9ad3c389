//! Batch extraction behavior of `ConverterFactory`.

mod common;

use common::FakeDecl;
use convmap::{ConverterFactory, Error, MalformedReason, MethodShape};
use pretty_assertions::assert_eq;

#[test]
fn empty_batch_yields_empty_sequence() {
    let factory = ConverterFactory::new();
    let descriptors = factory.create::<FakeDecl>(&[]).unwrap();
    assert_eq!(0, descriptors.len());
}

#[test]
fn single_valid_declaration_yields_one_descriptor() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::converter("conv::IntToLong", "i32", "i64")];
    let descriptors = factory.create(&decls).unwrap();
    assert_eq!(1, descriptors.len());
}

#[test]
fn descriptor_fields_mirror_the_declaration() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::converter(
        "com.example.activitystarter.MainActivity.IntToLongConverter",
        "java.lang.Integer",
        "java.lang.Long",
    )];
    let descriptors = factory.create(&decls).unwrap();

    assert_eq!(
        "com.example.activitystarter.MainActivity.IntToLongConverter",
        descriptors[0].class_name
    );
    assert_eq!("java.lang.Integer", descriptors[0].type_from);
    assert_eq!("java.lang.Long", descriptors[0].type_to);
}

#[test]
fn input_order_is_preserved() {
    let factory = ConverterFactory::new();
    let decls = [
        FakeDecl::converter("conv::IntToLong", "i32", "i64"),
        FakeDecl::converter("conv::IntToString", "i32", "String"),
    ];
    let descriptors = factory.create(&decls).unwrap();

    assert_eq!("conv::IntToLong", descriptors[0].class_name);
    assert_eq!("conv::IntToString", descriptors[1].class_name);
}

#[test]
fn declaration_without_methods_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::with_methods("conv::Empty", Vec::new())];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::NoConversionMethod,
            ..
        }
    ));
}

#[test]
fn declaration_with_two_methods_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::with_methods(
        "conv::Ambiguous",
        vec![
            MethodShape::new("convert", vec!["i32".to_string()], Some("i64".to_string())),
            MethodShape::new("also", vec!["i32".to_string()], Some("u64".to_string())),
        ],
    )];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::MultipleConversionMethods(2),
            ..
        }
    ));
}

#[test]
fn zero_parameter_method_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::with_methods(
        "conv::Source",
        vec![MethodShape::new(
            "convert",
            Vec::new(),
            Some("i64".to_string()),
        )],
    )];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::WrongParameterCount(0),
            ..
        }
    ));
}

#[test]
fn two_parameter_method_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::with_methods(
        "conv::Binary",
        vec![MethodShape::new(
            "convert",
            vec!["i32".to_string(), "i32".to_string()],
            Some("i64".to_string()),
        )],
    )];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::WrongParameterCount(2),
            ..
        }
    ));
}

#[test]
fn void_method_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::with_methods(
        "conv::Sink",
        vec![MethodShape::new("convert", vec!["i32".to_string()], None)],
    )];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::MissingReturnType,
            ..
        }
    ));
}

#[test]
fn malformed_sibling_aborts_the_whole_batch() {
    let factory = ConverterFactory::new();
    let decls = [
        FakeDecl::converter("conv::IntToLong", "i32", "i64"),
        FakeDecl::with_methods("conv::Broken", Vec::new()),
        FakeDecl::converter("conv::IntToString", "i32", "String"),
    ];
    let err = factory.create(&decls).unwrap_err();

    match err {
        Error::MalformedConverter { class_name, .. } => {
            assert_eq!("conv::Broken", class_name);
        }
        other => panic!("expected MalformedConverter, got {other}"),
    }
}

#[test]
fn create_is_idempotent() {
    let factory = ConverterFactory::new();
    let decls = [
        FakeDecl::converter("conv::IntToLong", "i32", "i64"),
        FakeDecl::converter("conv::StrToInt", "str", "i32"),
    ];

    let first = factory.create(&decls).unwrap();
    let second = factory.create(&decls).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_class_name_fails() {
    let factory = ConverterFactory::new();
    let decls = [FakeDecl::converter("not a class name", "i32", "i64")];
    let err = factory.create(&decls).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedConverter {
            reason: MalformedReason::InvalidTypeName(_),
            ..
        }
    ));
}
