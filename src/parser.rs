//! Readers for the tab-separated files produced by the external scoring tools
//!
//! Every reader checks the shape of each row and fails with
//! [`GbaError::MalformedRow`] if the row does not have the expected columns.
//! There is no recovery from malformed input.
//!
//! Each module exposes a `parse` function that reads from a file path and a
//! `read` function that reads from any [`BufRead`] source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{GbaError, GbaResult};

/// The 5th line of a tissue expression file must start with this text
pub const EXPRESSION_HEADER_PREFIX: &str = "Gene ID\tRatio";

fn open<P: AsRef<Path>>(file: P) -> GbaResult<BufReader<File>> {
    let filename = file.as_ref().display().to_string();
    let file = File::open(file).map_err(|_| GbaError::CannotOpenFile(filename))?;
    Ok(BufReader::new(file))
}

/// Discards the first `n` lines and returns the last one of them
///
/// Returns an empty `String` for `n == 0`
fn skip_lines<R: BufRead>(reader: &mut R, n: usize) -> GbaResult<String> {
    let mut line = String::with_capacity(80);
    for idx in 0..n {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(GbaError::MalformedRow {
                line: idx + 1,
                expected: 1,
                found: 0,
            });
        }
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Iterates the data rows of `reader`, starting after `offset` header lines
///
/// Yields the 1-based line number in the file with each row.
/// Empty lines are skipped.
fn rows<R: BufRead>(reader: R, offset: usize) -> impl Iterator<Item = GbaResult<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .map(move |(idx, line)| {
            line.map(|l| (idx + offset + 1, l.trim_end_matches('\r').to_string()))
                .map_err(GbaError::from)
        })
        .filter(|row| !matches!(row, Ok((_, line)) if line.is_empty()))
}

/// Splits a row into exactly `N` tab-separated fields
pub(crate) fn fields<const N: usize>(line: &str, line_no: usize) -> GbaResult<[&str; N]> {
    let cols: Vec<&str> = line.split('\t').collect();
    let found = cols.len();
    cols.try_into().map_err(|_| GbaError::MalformedRow {
        line: line_no,
        expected: N,
        found,
    })
}

/// Returns the first `N` tab-separated fields of a row, ignoring any further ones
pub(crate) fn leading_fields<const N: usize>(line: &str, line_no: usize) -> GbaResult<[&str; N]> {
    let mut cols = line.split('\t');
    let mut res = [""; N];
    for (idx, field) in res.iter_mut().enumerate() {
        let Some(col) = cols.next() else {
            return Err(GbaError::MalformedRow {
                line: line_no,
                expected: N,
                found: idx,
            });
        };
        *field = col;
    }
    Ok(res)
}

fn number(value: &str, line_no: usize) -> GbaResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GbaError::InvalidNumber {
            line: line_no,
            value: value.to_string(),
        })
}

fn rank(value: &str, line_no: usize) -> GbaResult<u32> {
    match value.trim().parse::<u32>() {
        Ok(rank) if rank > 0 => Ok(rank),
        _ => Err(GbaError::InvalidNumber {
            line: line_no,
            value: value.to_string(),
        }),
    }
}

/// Module to parse GBA centrality and RWR score files
///
/// GBA centrality:
/// ```text
/// ENSG    GENE    SCORE
/// ENSG00000000003 TSPAN6  0.0123
/// ```
///
/// RWR (`MultiXrank` output, the symbol column may be blank):
/// ```text
/// node    ENSG    score
/// TSPAN6  ENSG00000000003 0.00071
///         ENSG00000000005 0.00012
/// ```
pub mod scores {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::debug;

    use super::{fields, number, open, rows, skip_lines};
    use crate::genes::{GeneAliases, GeneId, GeneScores};
    use crate::GbaResult;

    fn read<R: BufRead>(
        mut reader: R,
        aliases: &mut GeneAliases,
        id_col: usize,
        symbol_col: usize,
    ) -> GbaResult<GeneScores> {
        skip_lines(&mut reader, 1)?;
        let mut scores = GeneScores::new();
        for row in rows(reader, 1) {
            let (line_no, line) = row?;
            let cols: [&str; 3] = fields(&line, line_no)?;
            let id = GeneId::from(cols[id_col]);
            let symbol = cols[symbol_col];
            if !symbol.is_empty() && !aliases.insert(symbol, &id) {
                debug!("Conflicting alias {} for {}", symbol, id);
            }
            scores.insert(id, number(cols[2], line_no)?)?;
        }
        Ok(scores)
    }

    /// Reads GBA centrality scores (`ENSG`, symbol, score) from any reader
    ///
    /// # Errors
    ///
    /// - [`crate::GbaError::MalformedRow`]: A row does not have 3 columns
    /// - [`crate::GbaError::InvalidNumber`]: A score is not a number
    /// - [`crate::GbaError::DuplicateGene`]: A gene is listed twice
    pub fn read_gba<R: BufRead>(reader: R, aliases: &mut GeneAliases) -> GbaResult<GeneScores> {
        read(reader, aliases, 0, 1)
    }

    /// Reads RWR scores (symbol or blank, `ENSG`, score) from any reader
    ///
    /// # Errors
    ///
    /// Same as [`read_gba`]
    pub fn read_rwr<R: BufRead>(reader: R, aliases: &mut GeneAliases) -> GbaResult<GeneScores> {
        read(reader, aliases, 1, 0)
    }

    /// Parses a GBA centrality score file
    ///
    /// Gene symbols are added to `aliases`.
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read_gba`]
    pub fn parse_gba<P: AsRef<Path>>(file: P, aliases: &mut GeneAliases) -> GbaResult<GeneScores> {
        debug!("Parsing GBA scores from {}", file.as_ref().display());
        read_gba(open(file)?, aliases)
    }

    /// Parses an RWR score file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read_rwr`]
    pub fn parse_rwr<P: AsRef<Path>>(file: P, aliases: &mut GeneAliases) -> GbaResult<GeneScores> {
        debug!("Parsing RWR scores from {}", file.as_ref().display());
        read_rwr(open(file)?, aliases)
    }

    #[cfg(test)]
    mod test_scores {
        use super::*;
        use crate::GbaError;

        #[test]
        fn gba_scores() {
            let data = "ENSG\tGENE\tSCORE\nENSG01\tDNAH1\t0.5\nENSG02\tCFAP43\t1e-3\n".as_bytes();
            let mut aliases = GeneAliases::new();
            let scores = read_gba(data, &mut aliases).unwrap();
            assert_eq!(scores.len(), 2);
            assert!((scores.get("ENSG02").unwrap() - 0.001).abs() < f64::EPSILON);
            assert_eq!(aliases.symbol("ENSG01"), Some("DNAH1"));
        }

        #[test]
        fn rwr_scores_with_blank_symbol() {
            let data = "node\tENSG\tscore\nDNAH1\tENSG01\t0.5\n\tENSG02\t0.25\n".as_bytes();
            let mut aliases = GeneAliases::new();
            let scores = read_rwr(data, &mut aliases).unwrap();
            assert_eq!(scores.get("ENSG01"), Some(0.5));
            assert_eq!(scores.get("ENSG02"), Some(0.25));
            assert_eq!(aliases.len(), 1);
        }

        #[test]
        fn malformed_row() {
            let data = "ENSG\tGENE\tSCORE\nENSG01\tDNAH1\t0.5\nENSG02\t0.25\n".as_bytes();
            let res = read_gba(data, &mut GeneAliases::new());
            assert!(matches!(
                res,
                Err(GbaError::MalformedRow {
                    line: 3,
                    expected: 3,
                    found: 2
                })
            ));
        }

        #[test]
        fn invalid_score() {
            let data = "ENSG\tGENE\tSCORE\nENSG01\tDNAH1\thigh\n".as_bytes();
            let res = read_gba(data, &mut GeneAliases::new());
            assert!(matches!(res, Err(GbaError::InvalidNumber { line: 2, .. })));
        }

        #[test]
        fn duplicate_gene() {
            let data = "ENSG\tGENE\tSCORE\nENSG01\tDNAH1\t0.5\nENSG01\tDNAH1\t0.7\n".as_bytes();
            let res = read_gba(data, &mut GeneAliases::new());
            assert!(matches!(res, Err(GbaError::DuplicateGene(_))));
        }

        #[test]
        fn missing_file() {
            let res = parse_gba("does/not/exist.tsv", &mut GeneAliases::new());
            assert!(matches!(res, Err(GbaError::CannotOpenFile(_))));
        }
    }
}

/// Module to parse tissue expression ratios
///
/// The file starts with 4 lines of free text, followed by a header
/// that must start with [`EXPRESSION_HEADER_PREFIX`](super::EXPRESSION_HEADER_PREFIX).
/// Only the first two columns of each row are used:
///
/// ```text
/// # tissue: testis
/// # ...
/// # ...
/// # ...
/// Gene ID Ratio   Tissue TPM  Other TPM
/// ENSG00000000003 0.84    12.1    14.3
/// ```
pub mod expression {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::debug;

    use super::{leading_fields, number, open, rows, skip_lines, EXPRESSION_HEADER_PREFIX};
    use crate::genes::{Expression, GeneId};
    use crate::interactome::Interactome;
    use crate::{GbaError, GbaResult};

    const SKIPPED_LINES: usize = 4;

    /// Reads expression ratios, keeping only genes of the `interactome`
    ///
    /// # Errors
    ///
    /// - [`GbaError::HeaderMismatch`]: The header does not start with the expected prefix
    /// - [`GbaError::MalformedRow`]: A row has less than 2 columns
    /// - [`GbaError::InvalidNumber`]: A ratio is not a number
    /// - [`GbaError::DuplicateGene`]: A gene is listed twice
    pub fn read<R: BufRead>(mut reader: R, interactome: &Interactome) -> GbaResult<Expression> {
        skip_lines(&mut reader, SKIPPED_LINES)?;
        let header = skip_lines(&mut reader, 1)?;
        if !header.starts_with(EXPRESSION_HEADER_PREFIX) {
            return Err(GbaError::HeaderMismatch {
                expected: EXPRESSION_HEADER_PREFIX.to_string(),
                found: header,
            });
        }

        let mut expression = Expression::new();
        let mut skipped = 0usize;
        for row in rows(reader, SKIPPED_LINES + 1) {
            let (line_no, line) = row?;
            let [id, ratio]: [&str; 2] = leading_fields(&line, line_no)?;
            let ratio = number(ratio, line_no)?;
            if interactome.contains(id) {
                expression.insert(GeneId::from(id), ratio)?;
            } else {
                skipped += 1;
            }
        }
        debug!(
            "Kept {} genes, skipped {} genes outside of the interactome",
            expression.len(),
            skipped
        );
        Ok(expression)
    }

    /// Parses a tissue expression file
    ///
    /// # Errors
    ///
    /// [`GbaError::CannotOpenFile`] and everything from [`read`]
    pub fn parse<P: AsRef<Path>>(file: P, interactome: &Interactome) -> GbaResult<Expression> {
        debug!("Parsing tissue expression from {}", file.as_ref().display());
        read(open(file)?, interactome)
    }

    #[cfg(test)]
    mod test_expression {
        use super::*;

        fn interactome() -> Interactome {
            let mut interactome = Interactome::default();
            interactome.add_edge("ENSG01".into(), "ENSG02".into());
            interactome
        }

        #[test]
        fn filters_to_interactome() {
            let data = "a\nb\nc\nd\nGene ID\tRatio\tTPM\nENSG01\t0.8\t1\nENSG02\t0.1\t1\nENSG03\t0.9\t1\n";
            let expression = read(data.as_bytes(), &interactome()).unwrap();
            assert_eq!(expression.len(), 2);
            assert_eq!(expression.get("ENSG01"), Some(0.8));
            assert!(!expression.contains("ENSG03"));
        }

        #[test]
        fn only_two_columns() {
            let data = "a\nb\nc\nd\nGene ID\tRatio\nENSG01\t0.8\n";
            let expression = read(data.as_bytes(), &interactome()).unwrap();
            assert_eq!(expression.len(), 1);
        }

        #[test]
        fn header_mismatch() {
            let data = "a\nb\nc\nd\nGene\tTPM\nENSG01\t0.8\n";
            let res = read(data.as_bytes(), &interactome());
            assert!(matches!(res, Err(GbaError::HeaderMismatch { .. })));
        }

        #[test]
        fn header_missing() {
            let data = "a\nb\nc\n";
            assert!(read(data.as_bytes(), &interactome()).is_err());
        }

        #[test]
        fn single_column_row() {
            let data = "a\nb\nc\nd\nGene ID\tRatio\nENSG01\n";
            let res = read(data.as_bytes(), &interactome());
            assert!(matches!(
                res,
                Err(GbaError::MalformedRow {
                    line: 6,
                    expected: 2,
                    found: 1
                })
            ));
        }
    }
}

/// Module to parse leave-one-out rank files
///
/// RWR ranks have no header:
/// ```text
/// ENSG00000000003 17
/// ```
///
/// GBA ranks have a header and a symbol column:
/// ```text
/// ENSG    GENE    RANK
/// ENSG00000000003 TSPAN6  17
/// ```
pub mod ranks {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::debug;

    use super::{fields, open, rank, rows, skip_lines};
    use crate::genes::{GeneId, Ranks};
    use crate::GbaResult;

    /// Reads RWR ranks (`ENSG`, rank) from any reader
    ///
    /// # Errors
    ///
    /// - [`crate::GbaError::MalformedRow`]: A row does not have 2 columns
    /// - [`crate::GbaError::InvalidNumber`]: A rank is not a positive integer
    /// - [`crate::GbaError::DuplicateGene`]: A gene is listed twice
    pub fn read_rwr<R: BufRead>(reader: R) -> GbaResult<Ranks> {
        let mut ranks = Ranks::new();
        for row in rows(reader, 0) {
            let (line_no, line) = row?;
            let [id, value]: [&str; 2] = fields(&line, line_no)?;
            ranks.insert(GeneId::from(id), rank(value, line_no)?)?;
        }
        Ok(ranks)
    }

    /// Reads GBA ranks (`ENSG`, symbol, rank) from any reader
    ///
    /// # Errors
    ///
    /// Same as [`read_rwr`], but rows must have 3 columns
    pub fn read_gba<R: BufRead>(mut reader: R) -> GbaResult<Ranks> {
        skip_lines(&mut reader, 1)?;
        let mut ranks = Ranks::new();
        for row in rows(reader, 1) {
            let (line_no, line) = row?;
            let [id, _symbol, value]: [&str; 3] = fields(&line, line_no)?;
            ranks.insert(GeneId::from(id), rank(value, line_no)?)?;
        }
        Ok(ranks)
    }

    /// Parses an RWR rank file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read_rwr`]
    pub fn parse_rwr<P: AsRef<Path>>(file: P) -> GbaResult<Ranks> {
        debug!("Parsing RWR ranks from {}", file.as_ref().display());
        read_rwr(open(file)?)
    }

    /// Parses a GBA rank file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read_gba`]
    pub fn parse_gba<P: AsRef<Path>>(file: P) -> GbaResult<Ranks> {
        debug!("Parsing GBA ranks from {}", file.as_ref().display());
        read_gba(open(file)?)
    }

    #[cfg(test)]
    mod test_ranks {
        use super::*;
        use crate::GbaError;

        #[test]
        fn rwr_ranks_without_header() {
            let ranks = read_rwr("ENSG01\t4\nENSG02\t120\n".as_bytes()).unwrap();
            assert_eq!(ranks.get("ENSG01"), Some(4));
            assert_eq!(ranks.get("ENSG02"), Some(120));
        }

        #[test]
        fn gba_ranks_with_header() {
            let ranks = read_gba("ENSG\tGENE\tRANK\nENSG01\tDNAH1\t4\r\n".as_bytes()).unwrap();
            assert_eq!(ranks.len(), 1);
            assert_eq!(ranks.get("ENSG01"), Some(4));
        }

        #[test]
        fn zero_rank() {
            let res = read_rwr("ENSG01\t0\n".as_bytes());
            assert!(matches!(res, Err(GbaError::InvalidNumber { line: 1, .. })));
        }

        #[test]
        fn gba_row_without_symbol() {
            let res = read_gba("ENSG\tGENE\tRANK\nENSG01\t4\n".as_bytes());
            assert!(matches!(res, Err(GbaError::MalformedRow { line: 2, .. })));
        }
    }
}

/// Module to parse the gene symbol to `ENSG` mapping
///
/// ```text
/// GENE    ENSG
/// DNAH1   ENSG00000114841
/// ```
pub mod gene2ensg {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::{debug, warn};

    use super::{fields, open, rows, skip_lines};
    use crate::genes::{GeneAliases, GeneId};
    use crate::GbaResult;

    /// Reads symbol/`ENSG` pairs from any reader
    ///
    /// Symbols or identifiers that are mapped more than once keep their first mapping.
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::MalformedRow`]: A row does not have 2 columns
    pub fn read<R: BufRead>(mut reader: R) -> GbaResult<GeneAliases> {
        skip_lines(&mut reader, 1)?;
        let mut aliases = GeneAliases::new();
        let mut conflicts = 0usize;
        for row in rows(reader, 1) {
            let (line_no, line) = row?;
            let [symbol, id]: [&str; 2] = fields(&line, line_no)?;
            if !aliases.insert(symbol, &GeneId::from(id)) {
                debug!("Ignoring ambiguous mapping {} -> {}", symbol, id);
                conflicts += 1;
            }
        }
        if conflicts > 0 {
            warn!("Ignored {} ambiguous gene symbol mappings", conflicts);
        }
        Ok(aliases)
    }

    /// Parses a gene symbol to `ENSG` file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read`]
    pub fn parse<P: AsRef<Path>>(file: P) -> GbaResult<GeneAliases> {
        debug!("Parsing gene aliases from {}", file.as_ref().display());
        read(open(file)?)
    }

    #[cfg(test)]
    mod test_gene2ensg {
        use super::*;

        #[test]
        fn keeps_first_mapping() {
            let data = "GENE\tENSG\nDNAH1\tENSG01\nDNAH1\tENSG02\nCFAP43\tENSG03\n";
            let aliases = read(data.as_bytes()).unwrap();
            assert_eq!(aliases.len(), 2);
            assert_eq!(aliases.id("DNAH1").unwrap().as_str(), "ENSG01");
            assert!(aliases.symbol("ENSG02").is_none());
        }
    }
}

/// Module to parse known causal genes per phenotype
///
/// Lines starting with `#` are comments:
/// ```text
/// # symbol  phenotype
/// DNAH1   MMAF
/// AURKC   MACRO
/// ```
pub mod causal_genes {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::debug;

    use super::{leading_fields, open, rows};
    use crate::genes::{CausalGenes, GeneAliases};
    use crate::interactome::Interactome;
    use crate::GbaResult;

    /// Reads the causal genes of `phenotype` from any reader
    ///
    /// Gene symbols are translated to `ENSG` identifiers via `aliases`.
    /// Genes without a known identifier or outside of the `interactome`
    /// are skipped.
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::MalformedRow`]: A row has less than 2 columns
    pub fn read<R: BufRead>(
        reader: R,
        phenotype: &str,
        aliases: &GeneAliases,
        interactome: &Interactome,
    ) -> GbaResult<CausalGenes> {
        let mut genes = CausalGenes::new();
        for row in rows(reader, 0) {
            let (line_no, line) = row?;
            if line.starts_with('#') {
                continue;
            }
            let [symbol, pheno]: [&str; 2] = leading_fields(&line, line_no)?;
            if pheno != phenotype {
                continue;
            }
            match aliases.id(symbol) {
                Some(id) if interactome.contains(id.as_str()) => {
                    genes.insert(id.clone());
                }
                Some(id) => debug!("Causal gene {} ({}) is not in the interactome", symbol, id),
                None => debug!("Causal gene {} has no known ENSG", symbol),
            }
        }
        Ok(genes)
    }

    /// Parses a causal genes file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read`]
    pub fn parse<P: AsRef<Path>>(
        file: P,
        phenotype: &str,
        aliases: &GeneAliases,
        interactome: &Interactome,
    ) -> GbaResult<CausalGenes> {
        debug!("Parsing causal genes from {}", file.as_ref().display());
        read(open(file)?, phenotype, aliases, interactome)
    }

    #[cfg(test)]
    mod test_causal_genes {
        use super::*;
        use crate::genes::GeneId;

        #[test]
        fn filter_phenotype_and_interactome() {
            let mut aliases = GeneAliases::new();
            aliases.insert("DNAH1", &GeneId::from("ENSG01"));
            aliases.insert("AURKC", &GeneId::from("ENSG02"));
            aliases.insert("CFAP43", &GeneId::from("ENSG09"));
            let mut interactome = Interactome::default();
            interactome.add_edge("ENSG01".into(), "ENSG02".into());

            let data = "# comment\nDNAH1\tMMAF\nAURKC\tMACRO\nCFAP43\tMMAF\nUNKNOWN\tMMAF\n";
            let genes = read(data.as_bytes(), "MMAF", &aliases, &interactome).unwrap();
            assert_eq!(genes.len(), 1);
            assert!(genes.contains("ENSG01"));
        }
    }
}

/// Module to parse the interactome in SIF format
///
/// A row with a single column is a node without interactions:
/// ```text
/// ENSG00000000003 pp  ENSG00000000005
/// ENSG00000000419
/// ```
pub mod interactome {
    use std::io::BufRead;
    use std::path::Path;

    use tracing::debug;

    use super::{fields, open, rows};
    use crate::genes::GeneId;
    use crate::interactome::Interactome;
    use crate::GbaResult;

    /// Reads an interactome from any reader
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::MalformedRow`]: A row has neither 1 nor 3 columns
    pub fn read<R: BufRead>(reader: R) -> GbaResult<Interactome> {
        let mut interactome = Interactome::default();
        for row in rows(reader, 0) {
            let (line_no, line) = row?;
            if !line.contains('\t') {
                interactome.add_node(GeneId::from(line.as_str()));
                continue;
            }
            let [a, _kind, b]: [&str; 3] = fields(&line, line_no)?;
            interactome.add_edge(GeneId::from(a), GeneId::from(b));
        }
        debug!(
            "Interactome with {} nodes and {} edges",
            interactome.len(),
            interactome.edge_count()
        );
        Ok(interactome)
    }

    /// Parses an interactome SIF file
    ///
    /// # Errors
    ///
    /// [`crate::GbaError::CannotOpenFile`] and everything from [`read`]
    pub fn parse<P: AsRef<Path>>(file: P) -> GbaResult<Interactome> {
        debug!("Parsing interactome from {}", file.as_ref().display());
        read(open(file)?)
    }

    #[cfg(test)]
    mod test_interactome {
        use super::*;

        #[test]
        fn sif_edges() {
            let data = "ENSG01\tpp\tENSG02\nENSG02\tpp\tENSG03\nENSG03\tpp\tENSG03\n";
            let interactome = read(data.as_bytes()).unwrap();
            assert_eq!(interactome.len(), 3);
            assert_eq!(interactome.edge_count(), 2);
        }

        #[test]
        fn single_node_row() {
            let data = "ENSG01\tpp\tENSG02\nENSG04\n";
            let interactome = read(data.as_bytes()).unwrap();
            assert_eq!(interactome.len(), 3);
            assert_eq!(interactome.edge_count(), 1);
            assert!(interactome.contains("ENSG04"));
        }

        #[test]
        fn two_column_row() {
            assert!(read("ENSG01\tENSG02\n".as_bytes()).is_err());
        }
    }
}
