use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::line_error;

const EXAMPLE_INPUT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

const EXAMPLES: &[Example] = &[
    Example::new(1, EXAMPLE_INPUT, "95437"),
    Example::new(2, EXAMPLE_INPUT, "24933642"),
];

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;
const ROOT: usize = 0;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, examples = EXAMPLES)]
#[aoc(year = 2022, day = 7, tags = ["2022"])]
pub struct Solver;

#[derive(Debug, Default)]
struct Directory<'a> {
    parent: Option<usize>,
    children: HashMap<&'a str, usize>,
    files: HashMap<&'a str, u64>,
}

/// Directory tree rebuilt from a terminal session, root at index 0
#[derive(Debug)]
pub struct FileSystem<'a> {
    dirs: Vec<Directory<'a>>,
}

impl<'a> FileSystem<'a> {
    fn child(&mut self, parent: usize, name: &'a str) -> usize {
        if let Some(&id) = self.dirs[parent].children.get(name) {
            return id;
        }
        let id = self.dirs.len();
        self.dirs.push(Directory {
            parent: Some(parent),
            ..Directory::default()
        });
        self.dirs[parent].children.insert(name, id);
        id
    }

    /// Total size of every directory, indexed like `dirs`
    fn sizes(&self) -> Result<Vec<u64>, SolveError> {
        let cache = DpCache::new(VecBackend::with_capacity(self.dirs.len()), self);
        (0..self.dirs.len())
            .map(|id| {
                cache
                    .get(&id)
                    .map_err(|e| SolveError::InvariantViolation(e.to_string()))
            })
            .collect()
    }
}

impl DpProblem<usize, u64> for &FileSystem<'_> {
    fn deps(&self, id: &usize) -> Vec<usize> {
        self.dirs[*id].children.values().copied().collect()
    }

    fn compute(&self, id: &usize, deps: Vec<u64>) -> u64 {
        self.dirs[*id].files.values().sum::<u64>() + deps.iter().sum::<u64>()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = FileSystem<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut fs = FileSystem {
            dirs: vec![Directory::default()],
        };
        let mut cwd = ROOT;

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut apply = || -> anyhow::Result<()> {
                match line.split_whitespace().collect::<Vec<_>>().as_slice() {
                    ["$", "cd", "/"] => cwd = ROOT,
                    ["$", "cd", ".."] => {
                        cwd = fs.dirs[cwd]
                            .parent
                            .context("cannot leave the root directory")?
                    }
                    ["$", "cd", name] => cwd = fs.child(cwd, *name),
                    ["$", "ls"] => {}
                    ["dir", name] => {
                        fs.child(cwd, *name);
                    }
                    [size, name] => {
                        let size = size
                            .parse()
                            .with_context(|| format!("invalid file size {size:?}"))?;
                        fs.dirs[cwd].files.insert(*name, size);
                    }
                    _ => return Err(anyhow!("unrecognised terminal line")),
                }
                Ok(())
            };
            apply().map_err(|e| line_error(idx + 1, e))?;
        }
        Ok(fs)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .sizes()?
            .into_iter()
            .filter(|&size| size <= SMALL_DIR_LIMIT)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sizes = shared.sizes()?;
        let free = DISK_SIZE.saturating_sub(sizes[ROOT]);
        let required = NEEDED_SPACE.saturating_sub(free);
        sizes
            .into_iter()
            .filter(|&size| size >= required)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| SolveError::NoSolution("no directory is large enough".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_directory_sizes() {
        let fs = Solver::parse(EXAMPLE_INPUT).unwrap();
        let mut sizes = fs.sizes().unwrap();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![584, 94853, 24933642, 48381165]);
    }

    #[test]
    fn test_examples() {
        let mut shared = Solver::parse(EXAMPLE_INPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "95437");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "24933642");
    }

    #[test]
    fn test_repeated_listing_is_not_double_counted() {
        let fs = Solver::parse("$ ls\n10 a\n$ ls\n10 a\n$ cd x\n$ cd ..\n$ cd x").unwrap();
        assert_eq!(fs.sizes().unwrap(), vec![10, 0]);
    }

    #[test]
    fn test_invalid_lines() {
        assert!(Solver::parse("$ cd ..").is_err());
        assert!(Solver::parse("$ rm -rf /").is_err());
        assert!(Solver::parse("abc file").is_err());
    }
}
