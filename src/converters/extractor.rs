//! Declaration shape validation and descriptor construction.

use crate::config::ExtractionConfig;
use crate::converters::declaration::ConverterDeclaration;
use crate::converters::descriptor::{is_qualified_name, ConverterDescriptor};
use crate::errors::{Error, MalformedReason, Result};

/// Validate one declaration and produce its descriptor.
///
/// The declaring type must expose exactly one conversion method; that
/// method must take exactly one parameter and return a value. Violations
/// fail with [`Error::MalformedConverter`] identifying the declaration,
/// which aborts the whole batch upstream.
pub fn extract<D>(decl: &D, config: &ExtractionConfig) -> Result<ConverterDescriptor>
where
    D: ConverterDeclaration + ?Sized,
{
    let class_name = decl.qualified_name();

    let method = match decl.conversion_methods() {
        [] => return Err(malformed(class_name, MalformedReason::NoConversionMethod)),
        [method] => method,
        methods => {
            return Err(malformed(
                class_name,
                MalformedReason::MultipleConversionMethods(methods.len()),
            ))
        }
    };

    let type_from = match method.parameter_types.as_slice() {
        [param] => param.as_str(),
        params => {
            return Err(malformed(
                class_name,
                MalformedReason::WrongParameterCount(params.len()),
            ))
        }
    };

    let type_to = match method.return_type.as_deref() {
        Some(ty) => ty,
        None => return Err(malformed(class_name, MalformedReason::MissingReturnType)),
    };

    for name in [class_name, type_from, type_to] {
        if !is_qualified_name(name) {
            return Err(malformed(
                class_name,
                MalformedReason::InvalidTypeName(name.to_string()),
            ));
        }
    }

    if !config.allow_identity && type_from == type_to {
        return Err(malformed(
            class_name,
            MalformedReason::IdentityConversion(type_from.to_string()),
        ));
    }

    log::debug!(
        "extracted converter {}: {} -> {}",
        class_name,
        type_from,
        type_to
    );

    Ok(ConverterDescriptor::new(class_name, type_from, type_to))
}

fn malformed(class_name: &str, reason: MalformedReason) -> Error {
    Error::MalformedConverter {
        class_name: class_name.to_string(),
        reason,
    }
}
