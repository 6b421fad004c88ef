//! Listing text for headers, blocks and instructions

use latbc_spec::{Arg, Header, Instruction};
use crate::block::Block;

/// Format instruction as `mnemonic arg1, arg2`
pub fn format(instr: &Instruction) -> String {
    let mnemonic = instr.opcode().mnemonic();
    if instr.args().is_empty() {
        return mnemonic.to_string();
    }

    let args: Vec<String> = instr.args().iter().map(format_arg).collect();
    format!("{} {}", mnemonic, args.join(", "))
}

/// Format a single argument
pub fn format_arg(arg: &Arg) -> String {
    match arg {
        Arg::Integer(value) => value.to_string(),
        Arg::String(s) => quote_string(s),
        Arg::Register(reg) => reg.name().to_string(),
        Arg::Method(method) => method.to_string(),
    }
}

/// Wrap in double quotes, escaping embedded quotes as `\"`
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push_str("\\\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    out
}

/// Block label, e.g. `<<0>>`
pub fn format_block_label(index: usize) -> String {
    format!("<<{}>>", index)
}

/// Label line followed by one indented line per instruction
pub fn format_block(block: &Block) -> String {
    let mut output = format_block_label(block.index);
    output.push('\n');
    for instr in &block.instructions {
        output.push_str("  ");
        output.push_str(&format(instr));
        output.push('\n');
    }
    output
}

/// Header summary lines; empty module and package names are omitted
pub fn format_header(name: &str, header: &Header) -> String {
    let mut output = format!("File: {}\nVersion: {}\n", name, header.version);
    if let Some(module) = header.module_name.as_deref().filter(|m| !m.is_empty()) {
        output.push_str(&format!("Module: {}\n", module));
    }
    if let Some(package) = header.package_name.as_deref().filter(|p| !p.is_empty()) {
        output.push_str(&format!("Package: {}\n", package));
    }
    output
}
