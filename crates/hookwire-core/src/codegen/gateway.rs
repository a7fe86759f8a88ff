// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Gateway generation.
//!
//! One method per hook on `BlockchainGateway<T: Transport>`: build the
//! request, run one synchronous round trip, validate the reply kind, and
//! unmarshal the outputs. Hooks that can fail return `Result` and surface
//! transport and protocol faults as errors; hooks that cannot fall back to
//! their declared bad-return values after a `tracing::warn!`, which is the
//! observable channel for faults the method signature cannot express.

use std::fmt::Write;

use crate::registry::{HookSignature, ParamType, Registry};

use super::util::{method_name, request_type, response_kind, response_type, write_header};
use super::Result;

pub(crate) fn generate(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    write_header(
        &mut out,
        "gateway",
        "Client-side gateway: forwards each hook call to the node process.",
    )?;
    write_imports(&mut out, registry)?;
    writeln!(out)?;
    writeln!(
        out,
        "/// Forwards blockchain hook calls from the VM process to the node."
    )?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// Each call is one synchronous request/response exchange; at most one"
    )?;
    writeln!(out, "/// request is in flight on the transport at a time.")?;
    writeln!(out, "pub struct BlockchainGateway<T: Transport> {{")?;
    writeln!(out, "    transport: T,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl<T: Transport> BlockchainGateway<T> {{")?;
    writeln!(out, "    /// Creates a gateway over the given transport.")?;
    writeln!(out, "    pub fn new(transport: T) -> Self {{")?;
    writeln!(out, "        Self {{ transport }}")?;
    writeln!(out, "    }}")?;
    for signature in registry.signatures() {
        write_method(&mut out, signature)?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}

fn write_imports(out: &mut String, registry: &Registry) -> Result<()> {
    let mut model_types = Vec::new();
    for ty in ["ContractCallInput", "EsdtToken", "UserAccount", "VmOutput"] {
        if uses_param(registry, |p| p.rust_type().contains(ty)) {
            model_types.push(ty);
        }
    }
    let uses_btreemap = uses_param(registry, |p| p == ParamType::BytesMap);
    let any_fallible = registry.signatures().iter().any(|s| s.has_error);
    let any_infallible = registry.signatures().iter().any(|s| !s.has_error);

    if uses_btreemap {
        writeln!(out, "use std::collections::BTreeMap;")?;
        writeln!(out)?;
    }
    if any_infallible {
        writeln!(out, "use tracing::warn;")?;
        writeln!(out)?;
    }
    writeln!(out, "use crate::common::message::MessageHandler;")?;
    writeln!(out, "use crate::common::messages::*;")?;
    if !model_types.is_empty() {
        writeln!(
            out,
            "use crate::common::model::{{{}}};",
            model_types.join(", ")
        )?;
    }
    if any_fallible {
        writeln!(out, "use crate::error::WireError;")?;
    }
    writeln!(out, "use crate::vm::Transport;")?;
    Ok(())
}

fn uses_param(registry: &Registry, predicate: impl Fn(ParamType) -> bool) -> bool {
    registry.signatures().iter().any(|signature| {
        signature
            .inputs
            .iter()
            .chain(signature.outputs.iter())
            .any(|(_, ty)| predicate(*ty))
    })
}

fn write_method(out: &mut String, signature: &HookSignature) -> Result<()> {
    let method = method_name(signature);
    let outputs = signature.outputs;
    let output_type = match outputs.len() {
        0 => String::new(),
        1 => outputs[0].1.rust_type().to_string(),
        _ => format!(
            "({})",
            outputs
                .iter()
                .map(|(_, ty)| ty.rust_type())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    let return_type = if signature.has_error {
        if outputs.is_empty() {
            " -> Result<(), WireError>".to_string()
        } else {
            format!(" -> Result<{output_type}, WireError>")
        }
    } else if outputs.is_empty() {
        String::new()
    } else {
        format!(" -> {output_type}")
    };

    writeln!(out)?;
    writeln!(out, "    /// Forwards a `{}` hook call to the node.", signature.name)?;
    if signature.has_error {
        writeln!(out, "    ///")?;
        writeln!(out, "    /// # Errors")?;
        writeln!(out, "    ///")?;
        writeln!(out, "    /// Returns the hook's own error, a transport failure, or")?;
        writeln!(out, "    /// [`WireError::BadHookResponse`] on a mismatched reply.")?;
    }
    match signature.inputs.len() {
        0 => writeln!(out, "    pub fn {method}(&mut self){return_type} {{")?,
        1 => writeln!(
            out,
            "    pub fn {method}(&mut self, {}: {}){return_type} {{",
            signature.inputs[0].0,
            signature.inputs[0].1.rust_type()
        )?,
        _ => {
            writeln!(out, "    pub fn {method}(")?;
            writeln!(out, "        &mut self,")?;
            for (name, ty) in signature.inputs {
                writeln!(out, "        {name}: {},", ty.rust_type())?;
            }
            writeln!(out, "    ){return_type} {{")?;
        }
    }

    let input_names: Vec<&str> = signature.inputs.iter().map(|(name, _)| *name).collect();
    writeln!(
        out,
        "        let request = {}::new({});",
        request_type(signature),
        input_names.join(", ")
    )?;
    if signature.has_error {
        write_fallible_body(out, signature)?;
    } else {
        write_infallible_body(out, signature)?;
    }
    writeln!(out, "    }}")?;
    Ok(())
}

fn write_fallible_body(out: &mut String, signature: &HookSignature) -> Result<()> {
    writeln!(
        out,
        "        let reply = self.transport.round_trip(Box::new(request))?;"
    )?;
    writeln!(
        out,
        "        if reply.kind() != MessageKind::{} {{",
        response_kind(signature)
    )?;
    writeln!(out, "            return Err(WireError::BadHookResponse);")?;
    writeln!(out, "        }}")?;
    writeln!(out, "        let response = reply")?;
    writeln!(out, "            .into_any()")?;
    writeln!(
        out,
        "            .downcast::<{}>()",
        response_type(signature)
    )?;
    writeln!(out, "            .map_err(|_| WireError::BadHookResponse)?;")?;
    writeln!(out, "        match response.envelope.error {{")?;
    writeln!(out, "            Some(error) => Err(error),")?;
    let ok_value = match signature.outputs.len() {
        0 => "()".to_string(),
        1 => format!("response.{}", signature.outputs[0].0),
        _ => format!(
            "({})",
            signature
                .outputs
                .iter()
                .map(|(name, _)| format!("response.{name}"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    writeln!(out, "            None => Ok({ok_value}),")?;
    writeln!(out, "        }}")?;
    Ok(())
}

fn write_infallible_body(out: &mut String, signature: &HookSignature) -> Result<()> {
    let bad_return = match signature.bad_return.len() {
        0 => String::new(),
        1 => format!(" {}", signature.bad_return[0]),
        _ => format!(" ({})", signature.bad_return.join(", ")),
    };
    writeln!(
        out,
        "        let reply = match self.transport.round_trip(Box::new(request)) {{"
    )?;
    writeln!(out, "            Ok(reply) => reply,")?;
    writeln!(out, "            Err(error) => {{")?;
    writeln!(
        out,
        "                warn!(hook = \"{}\", %error, \"transport failure\");",
        signature.name
    )?;
    writeln!(out, "                return{bad_return};")?;
    writeln!(out, "            }}")?;
    writeln!(out, "        }};")?;
    writeln!(
        out,
        "        if reply.kind() != MessageKind::{} {{",
        response_kind(signature)
    )?;
    writeln!(
        out,
        "            warn!(hook = \"{}\", kind = ?reply.kind(), \"mismatched response kind\");",
        signature.name
    )?;
    if signature.outputs.is_empty() {
        writeln!(out, "        }}")?;
        return Ok(());
    }
    writeln!(out, "            return{bad_return};")?;
    writeln!(out, "        }}")?;
    let final_value = match signature.outputs.len() {
        1 => format!("response.{}", signature.outputs[0].0),
        _ => format!(
            "({})",
            signature
                .outputs
                .iter()
                .map(|(name, _)| format!("response.{name}"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    let fallback = match signature.bad_return.len() {
        1 => signature.bad_return[0].to_string(),
        _ => format!("({})", signature.bad_return.join(", ")),
    };
    writeln!(
        out,
        "        match reply.into_any().downcast::<{}>() {{",
        response_type(signature)
    )?;
    writeln!(out, "            Ok(response) => {final_value},")?;
    writeln!(out, "            Err(_) => {fallback},")?;
    writeln!(out, "        }}")?;
    Ok(())
}
