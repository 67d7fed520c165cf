use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::compiler::lexer::{build_automaton, TokenKind, Tokenizer};
use crate::kit::lexer::{Automaton, Location, Range};
use crate::model::{CompositeEntity, Entity, EntityId, ParseOutput, SimpleEntity};
use harmonogram_config::ParserConfig;
use harmonogram_log::{debug, info, trace, warn, Logger};
use harmonogram_vfs::VirtualFileSystem;
use std::path::Path;
use std::sync::Arc;

const COMPOSITE_FIELDS: &str = "'name:', 'center:', 'color:', 'cycles:', '{' or '/*'";
const ENTITY_FIELDS: &str = "an entity field, '/*' or '}'";

/// Recursive-descent parser for Harmonogram sources.
///
/// Owns the token automaton, built once in [`Parser::new`]; every file gets
/// its own [`Tokenizer`] borrowing it.
pub struct Parser {
    automaton: Automaton<TokenKind>,
    config: ParserConfig,
    logger: Arc<Logger>,
}

impl Parser {
    pub fn new(config: ParserConfig, logger: Arc<Logger>) -> Self {
        let automaton = build_automaton();
        trace!(
            logger,
            "token automaton ({} nodes):\n{}",
            automaton.len(),
            automaton.dump()
        );
        Self {
            automaton,
            config,
            logger,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn automaton(&self) -> &Automaton<TokenKind> {
        &self.automaton
    }

    /// Parse `files` in order, one composite per file.
    ///
    /// Files that cannot be read are skipped with a warning. Any syntax or
    /// validation error aborts the whole run.
    pub fn parse<P: AsRef<Path>>(
        &self,
        fs: &dyn VirtualFileSystem,
        files: &[P],
    ) -> ParseResult<ParseOutput> {
        let _span = self.logger.enter_span("parse");
        let mut output = ParseOutput::default();

        for path in files {
            let path = path.as_ref();
            let file = path.display().to_string();
            let source = match fs.read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!(self.logger, "couldn't open file '{}': {}", file, e);
                    continue;
                }
            };
            self.parse_file(&file, &source, &mut output)?;
        }

        debug!(
            self.logger,
            "parsed {} entities from {} files",
            output.entities.len(),
            files.len()
        );
        Ok(output)
    }

    /// Parse a single in-memory source named `file`
    pub fn parse_str(&self, file: &str, source: &str) -> ParseResult<ParseOutput> {
        let mut output = ParseOutput::default();
        self.parse_file(file, source, &mut output)?;
        Ok(output)
    }

    fn parse_file(&self, file: &str, source: &str, output: &mut ParseOutput) -> ParseResult<()> {
        let _span = self.logger.enter_span("parse_file");
        info!(self.logger, "parsing: {}", file);

        FileParser {
            tokenizer: Tokenizer::new(&self.automaton, file, source, Arc::clone(&self.logger)),
            config: &self.config,
            logger: &self.logger,
            output,
        }
        .parse_composite()
    }
}

/// State of one file's parse; appends to the run's output
pub(super) struct FileParser<'p> {
    pub(super) tokenizer: Tokenizer<'p>,
    config: &'p ParserConfig,
    logger: &'p Arc<Logger>,
    output: &'p mut ParseOutput,
}

impl FileParser<'_> {
    pub(super) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.tokenizer.location())
    }

    /// Top level of a file: the composite and its nested blocks, up to end
    /// of input
    fn parse_composite(&mut self) -> ParseResult<()> {
        let begin = Location::start_of(self.tokenizer.cursor().file());
        let mut composite = CompositeEntity::default();

        loop {
            match self.tokenizer.next_token().kind {
                TokenKind::Name => composite.name = self.identifier(TokenKind::Name)?,
                TokenKind::Center => composite.center = self.position()?,
                TokenKind::Color => composite.color = self.color()?,
                TokenKind::Cycles => composite.cycles = self.number()?,
                TokenKind::EntityBegin => {
                    let id = self.parse_simple()?;
                    composite.add_member(id);
                }
                TokenKind::CommentBegin => self.skip_comment()?,
                TokenKind::Eof => break,
                found => {
                    return Err(self.error(ParseErrorKind::UnexpectedToken {
                        found,
                        expected: COMPOSITE_FIELDS,
                    }))
                }
            }
        }

        let hints: Vec<usize> = composite
            .members
            .iter()
            .filter_map(|id| self.output.get(*id))
            .map(Entity::preferred_buffer_size)
            .collect();
        if composite.cycles < 0.0 {
            warn!(
                self.logger,
                "composite '{}' has negative cycles {}, buffer hint clamped to 0",
                composite.name,
                composite.cycles
            );
        }
        composite.set_preferred_buffer_size(hints);

        let range = Range::new(begin, self.tokenizer.location());
        self.record_location(&composite.name, range);
        debug!(self.logger, "composite {}", composite);
        self.output.entities.push(composite.into());
        Ok(())
    }

    /// Body of a `{ ... }` block, after the opening brace
    fn parse_simple(&mut self) -> ParseResult<EntityId> {
        let begin = self.tokenizer.location();
        let mut entity = SimpleEntity::default();

        loop {
            match self.tokenizer.next_token().kind {
                TokenKind::Type => entity.entity_type = self.entity_type()?,
                TokenKind::Name => entity.name = self.identifier(TokenKind::Name)?,
                TokenKind::Center => entity.center = self.position()?,
                TokenKind::Direction => entity.direction = self.position()?,
                TokenKind::Frequency => entity.frequency.value = self.number()?,
                TokenKind::StartPhase => {
                    let start_phase = self.number()?;
                    entity.frequency.set_start_phase(start_phase);
                }
                TokenKind::Amplitude => entity.amplitude = self.number()?,
                TokenKind::Color => entity.color = self.color()?,
                TokenKind::CommentBegin => self.skip_comment()?,
                TokenKind::EntityEnd => break,
                TokenKind::Eof => return Err(self.error(ParseErrorKind::UnexpectedEndOfInput)),
                found => {
                    return Err(self.error(ParseErrorKind::UnexpectedToken {
                        found,
                        expected: ENTITY_FIELDS,
                    }))
                }
            }
        }

        let issues = entity.validate();
        if !issues.is_empty() {
            return Err(self.error(ParseErrorKind::InvalidEntity {
                name: entity.name,
                issues,
            }));
        }
        entity.set_preferred_buffer_size(self.config.time_delta);

        let range = Range::new(begin, self.tokenizer.location());
        self.record_location(&entity.name, range);
        debug!(self.logger, "entity {}", entity);

        let id = EntityId(self.output.entities.len());
        self.output.entities.push(entity.into());
        Ok(id)
    }

    /// Skip to the matching `*/`; comments do not nest
    fn skip_comment(&mut self) -> ParseResult<()> {
        loop {
            match self.tokenizer.next_token().kind {
                TokenKind::CommentEnd => return Ok(()),
                TokenKind::Eof => return Err(self.error(ParseErrorKind::UnterminatedComment)),
                _ => {}
            }
        }
    }

    fn record_location(&mut self, name: &str, range: Range) {
        debug!(self.logger, "{} -> {}", name, range);
        if let Some(previous) = self.output.locations.insert(name, range) {
            warn!(
                self.logger,
                "overwriting location of '{}', previously {}", name, previous
            );
        }
    }
}
