//! Converter declaration adapter over parsed Rust impl blocks.
//!
//! Bridges the host scanner's AST handles into the pipeline's
//! `ConverterDeclaration` capability. One adapter instance wraps one
//! `impl` block already identified as a converter candidate; walking the
//! compilation unit for candidates stays with the host.

use syn::{FnArg, ImplItem, ItemImpl, ReturnType, Type, Visibility};

use crate::config::ExtractionConfig;
use crate::converters::declaration::{ConverterDeclaration, MethodShape};

/// AST-walker result for one candidate converter impl block.
#[derive(Debug, Clone)]
pub struct RustConverterDecl {
    qualified_name: String,
    methods: Vec<MethodShape>,
}

impl RustConverterDecl {
    /// Build an adapter from a parsed impl block.
    ///
    /// `module_path` is the path of the module enclosing the impl; the
    /// qualified name joins it with the self type. Every inherent method
    /// counts as a conversion candidate, narrowed to `pub` methods when
    /// the config says so. The receiver is not a conversion parameter.
    pub fn from_impl(module_path: &[String], item: &ItemImpl, config: &ExtractionConfig) -> Self {
        let self_type = render_type(&item.self_ty);
        let qualified_name = if module_path.is_empty() {
            self_type
        } else {
            format!("{}::{}", module_path.join("::"), self_type)
        };

        let methods: Vec<MethodShape> = item
            .items
            .iter()
            .filter_map(|impl_item| match impl_item {
                ImplItem::Fn(method) => Some(method),
                _ => None,
            })
            .filter(|method| {
                !config.public_methods_only || matches!(method.vis, Visibility::Public(_))
            })
            .map(|method| MethodShape {
                name: method.sig.ident.to_string(),
                parameter_types: method
                    .sig
                    .inputs
                    .iter()
                    .filter_map(|input| match input {
                        FnArg::Typed(arg) => Some(render_type(&arg.ty)),
                        FnArg::Receiver(_) => None,
                    })
                    .collect(),
                return_type: render_return_type(&method.sig.output),
            })
            .collect();

        log::trace!(
            "collected {} conversion candidates from {}",
            methods.len(),
            qualified_name
        );

        Self {
            qualified_name,
            methods,
        }
    }
}

impl ConverterDeclaration for RustConverterDecl {
    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn conversion_methods(&self) -> &[MethodShape] {
        &self.methods
    }
}

/// Render a type as a fully-qualified name.
///
/// Path types join their segment identifiers; references render their
/// referent. Anything else falls back to the token stream, which the
/// extractor then rejects as an invalid name.
fn render_type(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .iter()
            .map(|seg| seg.ident.to_string())
            .collect::<Vec<_>>()
            .join("::"),
        Type::Reference(type_ref) => render_type(&type_ref.elem),
        other => quote::quote!(#other).to_string(),
    }
}

/// Return type as a qualified name; `None` models a void return.
fn render_return_type(output: &ReturnType) -> Option<String> {
    match output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            ty => Some(render_type(ty)),
        },
    }
}
