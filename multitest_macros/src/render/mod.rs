pub(crate) mod bind;

use multitest_core::{Error, GeneratedTest, TestGroup};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned, ToTokens};
use syn::{ext::IdentExt, parse_quote, Attribute, Ident, Item, ItemFn, ItemMod, Stmt};

use crate::{
    error::{messages, ErrorsVec},
    parse::{group::GroupInfo, literal::Literal, template::TemplateInfo},
    utils::{attr_ends_with, is_valid_ident},
};
use bind::{bind, Binding};

/// Append to `module` a test for every combination of every template.
pub(crate) fn multitest(mut module: ItemMod, info: GroupInfo) -> Result<TokenStream, ErrorsVec> {
    let group = info.templates.iter().enumerate().fold(
        info.members
            .iter()
            .fold(TestGroup::new(), |group, m| group.member(m.unraw().to_string())),
        |group, (index, template)| group.template(template.template(index)),
    );
    let expansion = group
        .expand()
        .map_err(|e| collision_error(&module.ident, &info, e))?;

    let mut errors = ErrorsVec::default();
    let mut tests = Vec::with_capacity(expansion.len());
    for test in &expansion {
        match generated_test(&info.templates[*test.body()], test) {
            Ok(test) => tests.push(Item::Fn(test)),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    if let Some((_, items)) = module.content.as_mut() {
        items.extend(tests);
    }
    Ok(module.into_token_stream())
}

fn collision_error(module: &Ident, info: &GroupInfo, error: Error) -> ErrorsVec {
    let span = match &error {
        Error::NameCollision { prefix, .. } => info
            .templates
            .iter()
            .filter(|t| prefix.starts_with(&format!("test_{}", t.name())))
            .max_by_key(|t| t.name().len())
            .map(TemplateInfo::span)
            .unwrap_or_else(|| module.span()),
    };
    syn::Error::new(span, error).into()
}

fn resolve_default_test_attr(is_async: bool) -> Attribute {
    if is_async {
        parse_quote! { #[async_std::test] }
    } else {
        parse_quote! { #[test] }
    }
}

fn render_exec_call(template: &Ident, args: &[&Ident], is_async: bool) -> TokenStream {
    if is_async {
        quote! {self::#template(#(#args),*).await}
    } else {
        quote! {self::#template(#(#args),*)}
    }
}

fn trace_arguments<'a>(args: impl Iterator<Item = &'a Ident>) -> Option<TokenStream> {
    let mut statements = args
        .map(|arg| {
            let s: Stmt = parse_quote! {
                println!("{} = {:?}", stringify!(#arg), #arg);
            };
            s
        })
        .peekable();
    if statements.peek().is_some() {
        Some(quote! {
            println!("{:-^40}", " TEST ARGUMENTS ");
            #(#statements)*
            println!("{:-^40}", " TEST START ");
        })
    } else {
        None
    }
}

fn render_bindings(template: &TemplateInfo, bindings: &[Binding]) -> TokenStream {
    let locals = bindings.iter().map(|b| &b.local).collect::<Vec<_>>();
    let values = bindings.iter().map(|b| &b.value.expr);
    let trace = if template.trace {
        trace_arguments(locals.iter().copied())
    } else {
        None
    };
    let execute = render_exec_call(template.ident(), &locals, template.is_async());
    quote! {
        #(let #locals = #values;)*
        #trace
        #execute
    }
}

fn generated_test(
    template: &TemplateInfo,
    test: &GeneratedTest<usize, Literal>,
) -> Result<ItemFn, syn::Error> {
    if !is_valid_ident(test.name()) {
        return Err(syn::Error::new(
            template.span(),
            messages::invalid_test_name(test.name()),
        ));
    }
    let name = Ident::new(test.name(), template.ident().span());
    let body = match bind(&template.signature, test.combination()) {
        Ok(bindings) => render_bindings(template, &bindings),
        Err(e) => {
            let message = format!("{}: {}(): {e}", test.name(), template.name());
            let span = template.span();
            quote_spanned! {span=> compile_error!(#message); }
        }
    };

    let (test_attrs, attrs): (Vec<_>, Vec<_>) = template
        .test_attrs
        .iter()
        .partition(|a| attr_ends_with(a, &parse_quote! {test}));
    // If no test attribute provided use the default one
    let test_attr = test_attrs
        .into_iter()
        .next()
        .cloned()
        .unwrap_or_else(|| resolve_default_test_attr(template.is_async()));
    let doc = test.doc().map(|doc| quote! { #[doc = #doc] });
    let asyncness = template.signature.asyncness;
    let output = &template.signature.output;

    Ok(parse_quote! {
        #test_attr
        #(#attrs)*
        #doc
        #[allow(non_snake_case)]
        #asyncness fn #name() #output {
            #body
        }
    })
}
