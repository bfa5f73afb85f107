//! Parsing program text back into [`Line`]s.
//!
//! Accepts exactly what `Display` produces, with any run of blanks standing
//! in for the tabs.

use std::str::FromStr;

use thiserror::Error;

use crate::{Cond, Conversion, Instr, Line, Reg, Size};

/// A line of program text that is not a valid label, data or instruction line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmParseError {
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),
    #[error("`{opcode}` needs a size suffix")]
    MissingSize { opcode: String },
    #[error("bad size suffix `{0}`")]
    BadSize(String),
    #[error("bad operands `{operands}` for `{opcode}`")]
    BadOperands { opcode: String, operands: String },
    #[error("bad number `{0}`")]
    BadNumber(String),
    #[error("malformed line `{0}`")]
    Malformed(String),
}

impl FromStr for Line {
    type Err = AsmParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.starts_with(char::is_whitespace) {
            return text.trim().parse().map(Line::Instr);
        }

        let (name, rest) = text
            .split_once(':')
            .ok_or_else(|| AsmParseError::Malformed(text.to_owned()))?;
        if !is_name(name) {
            return Err(AsmParseError::Malformed(text.to_owned()));
        }

        let rest = rest.trim();
        if rest.is_empty() {
            return Ok(Line::Label(name.to_owned()));
        }

        let (directive, value) = split_opcode(rest);
        let size = match directive.strip_prefix("DC.") {
            Some(suffix) => parse_size(suffix)?,
            None => return Err(AsmParseError::Malformed(text.to_owned())),
        };
        Ok(Line::Data {
            name: name.to_owned(),
            size,
            init: parse_number(value)?,
        })
    }
}

impl FromStr for Instr {
    type Err = AsmParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (opcode, operands) = split_opcode(text.trim());

        if let Some(conversion) = Conversion::from_mnemonic(opcode) {
            let reg = match operands {
                "D0" => Reg::D0,
                "D7" => Reg::D7,
                _ => return Err(bad_operands(opcode, operands)),
            };
            return Ok(Instr::Convert { conversion, reg });
        }

        let (mnemonic, suffix) = match opcode.split_once('.') {
            Some((mnemonic, suffix)) => (mnemonic, Some(suffix)),
            None => (opcode, None),
        };
        let sized = || -> Result<Size, AsmParseError> {
            match suffix {
                Some(suffix) => parse_size(suffix),
                None => Err(AsmParseError::MissingSize {
                    opcode: opcode.to_owned(),
                }),
            }
        };
        let only = |expected: &str, instr: Instr| {
            if operands == expected {
                Ok(instr)
            } else {
                Err(bad_operands(opcode, operands))
            }
        };

        match mnemonic {
            "MOVE" => parse_move(sized()?, opcode, operands),
            "ADD" => only("D7,D0", Instr::Add { size: sized()? }),
            "SUB" => only("D7,D0", Instr::Sub { size: sized()? }),
            "NEG" => only("D0", Instr::Neg { size: sized()? }),
            "MULS" => only("D7,D0", Instr::Mul),
            "DIVS" => only("D0,D7", Instr::Div),
            "AND" => only("D7,D0", Instr::And { size: sized()? }),
            "OR" => only("D7,D0", Instr::Or { size: sized()? }),
            "EOR" => only("D7,D0", Instr::Xor { size: sized()? }),
            "NOT" => only("D0", Instr::Not { size: sized()? }),
            "CMP" => {
                let size = sized()?;
                match operands {
                    "D0,D7" => Ok(Instr::Compare { size }),
                    "(SP),D0" => Ok(Instr::CompareTop { size }),
                    _ => Err(bad_operands(opcode, operands)),
                }
            }
            "TST" => only("D0", Instr::Test { size: sized()? }),
            "ADDQ" | "SUBQ" => {
                let size = sized()?;
                let value = operands
                    .strip_prefix('#')
                    .and_then(|rest| rest.strip_suffix(",D0"))
                    .ok_or_else(|| bad_operands(opcode, operands))?;
                let value = value
                    .parse::<u8>()
                    .map_err(|_| AsmParseError::BadNumber(value.to_owned()))?;
                if mnemonic == "ADDQ" {
                    Ok(Instr::AddQuick { size, value })
                } else {
                    Ok(Instr::SubQuick { size, value })
                }
            }
            "DBNZ" => {
                let size = sized()?;
                let label = operands
                    .strip_prefix("(SP),")
                    .filter(|label| is_name(label))
                    .ok_or_else(|| bad_operands(opcode, operands))?;
                Ok(Instr::DecBranchNonZero {
                    size,
                    label: label.to_owned(),
                })
            }
            "BRA" => Ok(Instr::Branch(target(opcode, operands)?)),
            "JSR" => Ok(Instr::Call(target(opcode, operands)?)),
            "RTS" => only("", Instr::Return),
            _ if suffix.is_none() => parse_conditional(opcode, operands),
            _ => Err(AsmParseError::UnknownOpcode(opcode.to_owned())),
        }
    }
}

/// `Bcc L` and `Scc D0`.
fn parse_conditional(opcode: &str, operands: &str) -> Result<Instr, AsmParseError> {
    if let Some(cond) = opcode.strip_prefix('B').and_then(Cond::from_mnemonic) {
        return Ok(Instr::BranchIf(cond, target(opcode, operands)?));
    }
    if let Some(cond) = opcode.strip_prefix('S').and_then(Cond::from_mnemonic) {
        return if operands == "D0" {
            Ok(Instr::Set(cond))
        } else {
            Err(bad_operands(opcode, operands))
        };
    }
    Err(AsmParseError::UnknownOpcode(opcode.to_owned()))
}

fn parse_move(size: Size, opcode: &str, operands: &str) -> Result<Instr, AsmParseError> {
    match operands {
        "D0,-(SP)" => return Ok(Instr::Push { size }),
        "(SP)+,D7" => return Ok(Instr::Pop { size }),
        "D7,D0" => return Ok(Instr::MoveSecondary { size }),
        _ => {}
    }
    if let Some(source) = operands.strip_suffix(",D0") {
        if let Some(value) = source.strip_prefix('#') {
            return Ok(Instr::LoadConst {
                size,
                value: parse_number(value)?,
            });
        }
        if let Some(name) = source.strip_suffix("(PC)").filter(|name| is_name(name)) {
            return Ok(Instr::Load {
                size,
                name: name.to_owned(),
            });
        }
    }
    if let Some(name) = operands
        .strip_prefix("D0,")
        .and_then(|dest| dest.strip_suffix("(PC)"))
        .filter(|name| is_name(name))
    {
        return Ok(Instr::Store {
            size,
            name: name.to_owned(),
        });
    }
    Err(bad_operands(opcode, operands))
}

/// Split `OPCODE operands` at the first run of blanks.
fn split_opcode(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((opcode, operands)) => (opcode, operands.trim()),
        None => (text, ""),
    }
}

fn parse_size(suffix: &str) -> Result<Size, AsmParseError> {
    Size::from_suffix(suffix).ok_or_else(|| AsmParseError::BadSize(suffix.to_owned()))
}

fn parse_number(text: &str) -> Result<i64, AsmParseError> {
    text.parse()
        .map_err(|_| AsmParseError::BadNumber(text.to_owned()))
}

fn target(opcode: &str, operands: &str) -> Result<String, AsmParseError> {
    if is_name(operands) {
        Ok(operands.to_owned())
    } else {
        Err(bad_operands(opcode, operands))
    }
}

fn bad_operands(opcode: &str, operands: &str) -> AsmParseError {
    AsmParseError::BadOperands {
        opcode: opcode.to_owned(),
        operands: operands.to_owned(),
    }
}

/// Labels and variable names: a letter or `_`, then letters, digits or `_`.
fn is_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
