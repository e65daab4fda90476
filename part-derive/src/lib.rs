//! A procedural macro for deriving part specs from annotated structs.
//!
//! Writing a primitive part by hand means threading the same boilerplate
//! through every mount function: acquire a wire per pin, build the struct,
//! register it as the source of its outputs, pick the mounted flavor. This
//! macro generates all of that from attributes on the struct's fields, using
//! the field names as pin names. The struct itself only has to implement
//! `sim::Component`.
//!
//! See the `Dff` part in the `gate` crate for a worked example.

extern crate proc_macro2;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Field, LitStr, Meta};

/// Generates a `spec() -> PartSpec` constructor for a component struct. Label
/// the struct members with one of the following attributes:
///
/// - `input` - The member is an input pin and should be a `WireRef`.
/// - `output` - The member is an output pin and should be a `WireRef`; the
///   mounted component is registered as its source.
///
/// Both accept `name = "..."` to override the pin name, which is how a pin
/// gets a name that is a Rust keyword, like the traditional `in`. Unlabeled
/// members are private state and are initialised with `Default::default()`.
///
/// The struct itself may carry `#[part(name = "...")]` to override the part
/// name (the default is the struct identifier) and `#[part(ticker)]` to mount
/// the component as a ticker the scheduler runs every half-cycle instead of a
/// pull-evaluated updater.
///
/// The generated code refers to `PartSpec`, `Wire`, `Component` and `Mounted`
/// without qualification, so the deriving module must import them from `sim`.
#[proc_macro_derive(Part, attributes(input, output, part))]
pub fn derive_part(input_token_stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input_token_stream as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_identifier = &input.ident;
    let fields = match &input.data {
        Data::Struct(DataStruct { fields, .. }) => fields,
        _ => return Ok(TokenStream2::new()),
    };

    let mut part_name = struct_identifier.to_string();
    let mut ticker = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("part") {
            continue;
        }
        match &attr.meta {
            Meta::List(_) => attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ticker") {
                    ticker = true;
                    Ok(())
                } else if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    part_name = value.value();
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"...\"` or `ticker`"))
                }
            })?,
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[part(name = \"...\")] or #[part(ticker)]",
                ))
            }
        }
    }

    let mut input_names = Vec::new();
    let mut output_names = Vec::new();
    let mut output_idents = Vec::new();
    let mut field_inits = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "derive(Part) requires named fields"))?;
        let input_pin = pin_attr(field, "input")?;
        let output_pin = pin_attr(field, "output")?;
        match (input_pin, output_pin) {
            (Some(_), Some(_)) => {
                return Err(syn::Error::new_spanned(
                    field,
                    "a field is either an input or an output, not both",
                ))
            }
            (Some(pin), None) => {
                input_names.push(pin.clone());
                field_inits.push(quote! { #ident: socket.wire(#pin) });
            }
            (None, Some(pin)) => {
                output_names.push(pin.clone());
                output_idents.push(ident.clone());
                field_inits.push(quote! { #ident: socket.wire(#pin) });
            }
            (None, None) => {
                field_inits.push(quote! { #ident: ::std::default::Default::default() });
            }
        }
    }

    let kind = if ticker {
        quote! { Ticker }
    } else {
        quote! { Updater }
    };
    Ok(quote! {
        impl #struct_identifier {
            /// Builds the reusable part spec for this component.
            /// (automatically generated function)
            pub fn spec() -> PartSpec {
                PartSpec::with_pins(
                    #part_name,
                    ::std::vec![#(#input_names.to_string()),*],
                    ::std::vec![#(#output_names.to_string()),*],
                    |socket| {
                        let part = ::std::rc::Rc::new(::std::cell::RefCell::new(
                            #struct_identifier {
                                #(#field_inits),*
                            },
                        ));
                        let component: ::std::rc::Rc<::std::cell::RefCell<dyn Component>> =
                            part.clone();
                        #(
                            Wire::set_source(&part.borrow().#output_idents, &component);
                        )*
                        Mounted::#kind(component)
                    },
                )
            }
        }
    })
}

/// Extracts the pin name from a field's `input`/`output` attribute, if it has
/// one. The pin name defaults to the field name.
fn pin_attr(field: &Field, which: &str) -> syn::Result<Option<String>> {
    for attr in &field.attrs {
        if !attr.path().is_ident(which) {
            continue;
        }
        let default = field
            .ident
            .as_ref()
            .expect("only named fields reach here")
            .to_string();
        return match &attr.meta {
            Meta::Path(_) => Ok(Some(default)),
            Meta::List(_) => {
                let mut name = None;
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("name") {
                        let value: LitStr = meta.value()?.parse()?;
                        name = Some(value.value());
                        Ok(())
                    } else {
                        Err(meta.error("expected `name = \"...\"`"))
                    }
                })?;
                Ok(Some(name.unwrap_or(default)))
            }
            Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected #[input], #[output], or #[input(name = \"...\")]",
            )),
        };
    }
    Ok(None)
}
