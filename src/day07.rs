//! Day 7: No Space Left On Device.
//!
//! Rebuilds the directory tree from a shell transcript. Directories live in
//! an index arena; each holds its parent index and the sizes hang off that.

use crate::error::{Error, Result};

const TOTAL_DISK_SPACE: u64 = 70_000_000;
const FREE_SPACE_NEEDED: u64 = 30_000_000;

#[derive(Debug)]
struct Dir {
    name: String,
    parent: Option<usize>,
    children: Vec<usize>,
    file_sizes: u64,
}

#[derive(Debug)]
pub struct Filesystem {
    dirs: Vec<Dir>,
}

impl Filesystem {
    fn push_dir(&mut self, name: &str, parent: usize) -> usize {
        let idx = self.dirs.len();
        self.dirs.push(Dir {
            name: name.to_owned(),
            parent: Some(parent),
            children: Vec::new(),
            file_sizes: 0,
        });
        self.dirs[parent].children.push(idx);
        idx
    }

    fn child(&self, parent: usize, name: &str) -> Result<usize> {
        self.dirs[parent]
            .children
            .iter()
            .copied()
            .find(|&idx| self.dirs[idx].name == name)
            .ok_or_else(|| Error::bad_line(name))
    }

    /// Total size of the directory at `idx`, files and subdirectories both.
    fn size(&self, idx: usize) -> u64 {
        let dir = &self.dirs[idx];
        dir.file_sizes
            + dir
                .children
                .iter()
                .map(|&child| self.size(child))
                .sum::<u64>()
    }

    fn sizes(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.dirs.len()).map(|idx| self.size(idx))
    }

    #[cfg(test)]
    fn size_of(&self, name: &str) -> Option<u64> {
        (0..self.dirs.len())
            .find(|&idx| self.dirs[idx].name == name)
            .map(|idx| self.size(idx))
    }
}

pub fn parse(input: &str) -> Result<Filesystem> {
    let mut fs = Filesystem {
        dirs: vec![Dir {
            name: "/".to_owned(),
            parent: None,
            children: Vec::new(),
            file_sizes: 0,
        }],
    };
    let mut current = 0;

    for line in input.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["$", "cd", "/"] => current = 0,
            ["$", "cd", ".."] => {
                current = fs.dirs[current].parent.ok_or_else(|| Error::bad_line(line))?;
            }
            ["$", "cd", name] => current = fs.child(current, *name)?,
            // `$ ls` doesn't change state
            ["$", "ls"] => {}
            ["dir", name] => {
                fs.push_dir(*name, current);
            }
            // 1234 file_name
            [size, _name] => fs.dirs[current].file_sizes += size.parse::<u64>()?,
            _ => return Err(Error::bad_line(line)),
        }
    }
    Ok(fs)
}

pub fn part1(input: &str) -> Result<u64> {
    let fs = parse(input)?;
    Ok(fs.sizes().filter(|&size| size <= 100_000).sum())
}

pub fn part2(input: &str) -> Result<u64> {
    let fs = parse(input)?;
    let space_available = TOTAL_DISK_SPACE.saturating_sub(fs.size(0));
    // zero when the update already fits and any directory qualifies
    let space_to_find = FREE_SPACE_NEEDED.saturating_sub(space_available);
    fs.sizes()
        .filter(|&size| size >= space_to_find)
        .min()
        .ok_or(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE: &str = "\
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

    #[rstest]
    #[case("e", 584)]
    #[case("a", 94853)]
    #[case("d", 24933642)]
    #[case("/", 48381165)]
    fn directory_sizes(#[case] name: &str, #[case] size: u64) {
        let fs = parse(EXAMPLE).unwrap();
        assert_eq!(fs.size_of(name), Some(size));
    }

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 95437);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 24933642);
    }

    #[test]
    fn nothing_to_delete_picks_smallest_directory() {
        // plenty of room already, so every directory qualifies
        assert_eq!(part2("$ cd /\n$ ls\n100 a.txt").unwrap(), 100);
    }
}
