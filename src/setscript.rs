use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{seq::{IteratorRandom, SliceRandom}, Rng};

use crate::{relation::WRITE_BUFFER_SIZE, GenError};

const MAX_SETS: usize = 26;
const MAX_UNIVERSE: usize = 26;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SetScriptParams {
    pub n_sets: usize,
    pub elements_per_set: usize,
    pub universe_size: usize,
}

impl SetScriptParams {
    pub fn validate(&self) -> Result<(), GenError> {
        if self.n_sets == 0 || self.n_sets > MAX_SETS {
            return Err(GenError::invalid(format!(
                "set count {} must be between 1 and {}", self.n_sets, MAX_SETS)));
        }
        if self.universe_size == 0 || self.universe_size > MAX_UNIVERSE {
            return Err(GenError::invalid(format!(
                "universe size {} must be between 1 and {}", self.universe_size, MAX_UNIVERSE)));
        }
        if self.elements_per_set > self.universe_size {
            return Err(GenError::invalid(format!(
                "universe of {} cannot supply {} elements per set",
                self.universe_size, self.elements_per_set)));
        }
        Ok(())
    }

    /// Set names `A`, `B`, ...
    pub fn set_names(&self) -> Vec<char> {
        ('A'..='Z').take(self.n_sets).collect()
    }

    /// Element universe `a`, `b`, ...
    pub fn universe(&self) -> Vec<char> {
        ('a'..='z').take(self.universe_size).collect()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Union,
    Intersection,
    Difference,
    Subset,
    Equal,
}

impl BinaryOp {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Union => '+',
            BinaryOp::Intersection => '&',
            BinaryOp::Difference => '-',
            BinaryOp::Subset => '<',
            BinaryOp::Equal => '=',
        }
    }
}

/// One line of a set-algebra script.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SetCommand {
    New(char),
    Add(char, char),
    Remove(char, char),
    Delete(char),
    SeeAll,
    See(char),
    Power(char),
    Binary(char, BinaryOp, char),
}

impl fmt::Display for SetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetCommand::New(set) => write!(f, "new {}", set),
            SetCommand::Add(set, elem) => write!(f, "add {} {}", set, elem),
            SetCommand::Remove(set, elem) => write!(f, "rem {} {}", set, elem),
            SetCommand::Delete(set) => write!(f, "del {}", set),
            SetCommand::SeeAll => f.write_str("see"),
            SetCommand::See(set) => write!(f, "see {}", set),
            SetCommand::Power(set) => write!(f, "pow {}", set),
            SetCommand::Binary(a, op, b) => write!(f, "{} {} {}", a, op.symbol(), b),
        }
    }
}

/// Builds a script exercising every verb of the set-algebra interpreter.
///
/// The shape depends only on `params`; the rng picks inserted elements,
/// removed elements and which sets get deleted.
pub fn set_script(params: &SetScriptParams, rng: &mut impl Rng) -> Result<Vec<SetCommand>, GenError> {
    params.validate()?;

    let names = params.set_names();
    let universe = params.universe();
    let mut commands = Vec::new();

    commands.extend(names.iter().map(|&name| SetCommand::New(name)));

    for &name in &names {
        let elems = universe.choose_multiple(rng, params.elements_per_set);
        commands.extend(elems.map(|&e| SetCommand::Add(name, e)));
    }

    commands.push(SetCommand::SeeAll);
    commands.extend(names.iter().map(|&name| SetCommand::See(name)));

    for &a in &names {
        for &b in names.iter().filter(|&&b| b != a) {
            commands.extend([
                SetCommand::Binary(a, BinaryOp::Union, b),
                SetCommand::Binary(a, BinaryOp::Intersection, b),
                SetCommand::Binary(a, BinaryOp::Difference, b),
                SetCommand::Binary(a, BinaryOp::Subset, b),
                SetCommand::Binary(b, BinaryOp::Subset, a),
                SetCommand::Binary(a, BinaryOp::Equal, b),
            ]);
        }
    }

    for &name in &names {
        commands.push(SetCommand::Power(name));
        // Checked non-empty by validate.
        if let Some(&elem) = universe.choose(rng) {
            commands.push(SetCommand::Remove(name, elem));
        }
    }

    let delete_count = usize::max(names.len() / 2, 1);
    let deleted = names.iter().copied().choose_multiple(rng, delete_count);
    commands.extend(deleted.into_iter().map(SetCommand::Delete));

    commands.push(SetCommand::SeeAll);
    Ok(commands)
}

pub fn write_set_script(path: &Path, commands: &[SetCommand]) -> Result<(), GenError> {
    let file = File::create(path)?;
    set_script_to_writer(file, commands)
}

pub fn set_script_to_writer(writer: impl Write, commands: &[SetCommand]) -> Result<(), GenError> {
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, writer);
    for command in commands {
        writeln!(writer, "{}", command)?;
    }
    writer.flush()?;
    Ok(())
}

/// Builds and writes a script, returning the number of commands.
pub fn generate_set_script(
    path: &Path,
    params: &SetScriptParams,
    rng: &mut impl Rng) -> Result<usize, GenError>
{
    let commands = set_script(params, rng)?;
    write_set_script(path, &commands)?;
    Ok(commands.len())
}
