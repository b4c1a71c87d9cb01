//! Derive macro implementation used by `calckit-core`.
//!
//! `calckit-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::Quantity`, so it is meant to be used inside `calckit-core`.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit>` (formats as `<value> <symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "km"`: short unit id, also the displayed symbol
//! - `name = "kilometer"`: long unit id, matched case-insensitively by lookups
//! - `family = Length`: conversion family marker type
//! - `ratio = 1000.0`: multiplicative factor relative to the family's base unit

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `name`, `family` and `ratio`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let name = &unit_attr.name;
    let family = &unit_attr.family;
    let ratio = &unit_attr.ratio;

    let expanded = quote! {
        impl crate::Unit for #ident {
            const RATIO: f64 = #ratio;
            type Fam = #family;
            const SYMBOL: &'static str = #symbol;
            const NAME: &'static str = #name;
        }

        impl ::core::fmt::Display for crate::Quantity<#ident> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#ident as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    name: LitStr,
    family: Expr,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut name: Option<LitStr> = None;
        let mut family: Option<Expr> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "name" => name = Some(input.parse()?),
                "family" => family = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let family = family
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `family`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "`symbol` must not be empty"));
        }

        Ok(UnitAttribute {
            symbol,
            name,
            family,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
