// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Replier generation.
//!
//! One function per hook: downcast the request, invoke the hook
//! implementation with the request's fields, and wrap the outputs in the
//! response message. A request that downcasts to the wrong type routes to
//! `mismatched_request_reply` instead of panicking. When the hook can fail,
//! the `Err` arm fills the outputs with zero values and carries the error
//! in the response envelope.

use std::fmt::Write;

use crate::registry::{HookSignature, Registry};

use super::util::{method_name, request_type, response_type, write_header};
use super::Result;

pub(crate) fn generate(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    write_header(
        &mut out,
        "repliers",
        "Server-side repliers: one marshaling shim per blockchain hook.",
    )?;
    writeln!(out, "use crate::common::message::MessageHandler;")?;
    writeln!(out, "use crate::common::messages::*;")?;
    writeln!(out, "use crate::hooks::BlockchainHooks;")?;
    if registry
        .signatures()
        .iter()
        .any(|signature| !signature.inputs.is_empty())
    {
        writeln!(out, "use crate::node::mismatched_request_reply;")?;
    }
    for signature in registry.signatures() {
        write_replier(&mut out, signature)?;
    }
    Ok(out)
}

fn write_replier(out: &mut String, signature: &HookSignature) -> Result<()> {
    let method = method_name(signature);
    writeln!(out)?;
    writeln!(out, "/// Replies to a `{}` hook request.", signature.name)?;
    writeln!(out, "pub fn reply_to_{method}(")?;
    writeln!(out, "    hooks: &mut dyn BlockchainHooks,")?;
    if signature.inputs.is_empty() {
        writeln!(out, "    _request: &dyn MessageHandler,")?;
    } else {
        writeln!(out, "    request: &dyn MessageHandler,")?;
    }
    writeln!(out, ") -> Box<dyn MessageHandler> {{")?;
    if !signature.inputs.is_empty() {
        writeln!(
            out,
            "    let Some(request) = request.as_any().downcast_ref::<{}>() else {{",
            request_type(signature)
        )?;
        writeln!(out, "        return mismatched_request_reply(request);")?;
        writeln!(out, "    }};")?;
    }

    let args: Vec<String> = signature
        .inputs
        .iter()
        .map(|(name, ty)| {
            if ty.is_copy() {
                format!("request.{name}")
            } else {
                format!("request.{name}.clone()")
            }
        })
        .collect();
    let outputs: Vec<&str> = signature.outputs.iter().map(|(name, _)| *name).collect();

    if signature.has_error {
        let binding = match outputs.len() {
            0 => "error".to_string(),
            _ => format!("({}, error)", outputs.join(", ")),
        };
        write_call(out, &format!("let {binding} = match "), &method, &args, " {")?;
        match outputs.len() {
            0 => {
                writeln!(out, "        Ok(()) => None,")?;
                writeln!(out, "        Err(error) => Some(error.into()),")?;
            }
            1 => {
                writeln!(out, "        Ok({}) => ({}, None),", outputs[0], outputs[0])?;
                writeln!(
                    out,
                    "        Err(error) => (Default::default(), Some(error.into())),"
                )?;
            }
            _ => {
                let joined = outputs.join(", ");
                writeln!(out, "        Ok(({joined})) => ({joined}, None),")?;
                let zeros = vec!["Default::default()"; outputs.len()].join(", ");
                writeln!(out, "        Err(error) => ({zeros}, Some(error.into())),")?;
            }
        }
        writeln!(out, "    }};")?;
    } else {
        let prefix = match outputs.len() {
            0 => String::new(),
            1 => format!("let {} = ", outputs[0]),
            _ => format!("let ({}) = ", outputs.join(", ")),
        };
        write_call(out, &prefix, &method, &args, ";")?;
    }

    let mut response_args: Vec<&str> = outputs.clone();
    if signature.has_error {
        response_args.push("error");
    }
    writeln!(
        out,
        "    Box::new({}::new({}))",
        response_type(signature),
        response_args.join(", ")
    )?;
    writeln!(out, "}}")?;
    Ok(())
}

fn write_call(
    out: &mut String,
    prefix: &str,
    method: &str,
    args: &[String],
    suffix: &str,
) -> Result<()> {
    if args.len() <= 1 {
        writeln!(out, "    {prefix}hooks.{method}({}){suffix}", args.join(", "))?;
    } else {
        writeln!(out, "    {prefix}hooks.{method}(")?;
        for arg in args {
            writeln!(out, "        {arg},")?;
        }
        writeln!(out, "    ){suffix}")?;
    }
    Ok(())
}
