//! Syntax tree to block renderer.
//!
//! Every node renders to a flat sequence of [`Fragment`]s: rich-text runs for
//! inline nodes, blocks for container nodes. Inline containers compose their
//! style onto the runs of their children; block containers wrap runs into
//! blocks. Constructs without a block equivalent are degraded and reported to
//! the [`DiagnosticSink`].

use std::mem;

use tracing::debug;

use crate::block::{Block, BlockKind};
use crate::context::{ListKind, RenderContext};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::rich_text::{Annotation, RichText};
use crate::syntax::{MAILTO, NodeKind, SyntaxNode};

/// One element of a render result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Text(RichText),
    Block(Block),
}

impl Fragment {
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Result of rendering a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
    /// One entry per degraded or dropped construct.
    pub diagnostics: Vec<Diagnostic>,
}

/// Render a document tree, collecting diagnostics into the output.
pub fn render_document(document: &SyntaxNode) -> RenderOutput {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let blocks = Renderer::new(&mut diagnostics).render_document(document);
    RenderOutput {
        blocks,
        diagnostics,
    }
}

/// Tree walker bound to a diagnostic sink.
///
/// Holds no render state of its own; list state travels in the
/// [`RenderContext`] argument.
pub struct Renderer<'s> {
    sink: &'s mut dyn DiagnosticSink,
}

impl<'s> Renderer<'s> {
    pub fn new(sink: &'s mut dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Render a document to its top-level blocks.
    ///
    /// Runs that end up at the top level (a bare inline root, for instance)
    /// are wrapped into paragraphs.
    pub fn render_document(&mut self, document: &SyntaxNode) -> Vec<Block> {
        let fragments = self.render(document, RenderContext::new());
        blocks_from_fragments(fragments)
    }

    /// Render one node.
    pub fn render(&mut self, node: &SyntaxNode, ctx: RenderContext) -> Vec<Fragment> {
        match node {
            SyntaxNode::Document(children) | SyntaxNode::EscapeSequence(children) => {
                self.render_children(children, ctx)
            }
            SyntaxNode::Paragraph(children) => self.paragraph(children, ctx),
            SyntaxNode::Heading { level, children } => self.heading(*level, children, ctx),
            SyntaxNode::Strong(children) => self.annotated(children, Annotation::Bold, ctx),
            SyntaxNode::Emphasis(children) => self.annotated(children, Annotation::Italic, ctx),
            SyntaxNode::Strikethrough(children) => {
                self.annotated(children, Annotation::Strikethrough, ctx)
            }
            SyntaxNode::InlineCode(children) => self.annotated(children, Annotation::Code, ctx),
            SyntaxNode::Image { src, children } => self.image(src, children, ctx),
            SyntaxNode::Link { target, children } => self.link(target, children, ctx),
            SyntaxNode::AutoLink { target } => {
                let content = target.strip_prefix(MAILTO).unwrap_or(target.as_str());
                vec![Fragment::Text(RichText::linked(content, target.as_str()))]
            }
            SyntaxNode::List { start, children } => {
                self.render_children(children, ctx.enter_list(*start))
            }
            SyntaxNode::ListItem(children) => self.list_item(children, ctx),
            SyntaxNode::Quote(children) => self.quote(children, ctx),
            SyntaxNode::BlockCode { children, .. } => self.block_code(children, ctx),
            SyntaxNode::ThematicBreak => {
                self.degrade(
                    NodeKind::ThematicBreak,
                    "thematic breaks are not supported; ignoring",
                );
                Vec::new()
            }
            SyntaxNode::LineBreak => vec![Fragment::Text(RichText::plain("\n"))],
            SyntaxNode::Table(_) => {
                self.degrade(NodeKind::Table, "tables are not supported; ignoring");
                Vec::new()
            }
            SyntaxNode::TableRow(_) | SyntaxNode::TableCell(_) => Vec::new(),
            SyntaxNode::RawText(content) => {
                vec![Fragment::Text(RichText::plain(content.as_str()))]
            }
        }
    }

    /// Render all children of `node` into one flat sequence.
    pub fn render_inner(&mut self, node: &SyntaxNode, ctx: RenderContext) -> Vec<Fragment> {
        self.render_children(node.children(), ctx)
    }

    fn render_children(&mut self, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        let mut fragments = Vec::with_capacity(children.len());
        for child in children {
            fragments.extend(self.render(child, ctx));
        }
        fragments
    }

    fn paragraph(&mut self, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        let (text, stray) = split_runs(self.render_children(children, ctx));
        with_trailing_blocks(Block::paragraph(text), stray)
    }

    fn heading(&mut self, level: u8, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        if level > BlockKind::MAX_HEADING_LEVEL {
            self.degrade(
                NodeKind::Heading,
                format!(
                    "heading level {level} is not supported; falling back to level {}",
                    BlockKind::MAX_HEADING_LEVEL
                ),
            );
        }
        let (text, stray) = split_runs(self.render_children(children, ctx));
        with_trailing_blocks(Block::heading(level, text), stray)
    }

    fn annotated(
        &mut self,
        children: &[SyntaxNode],
        tag: Annotation,
        ctx: RenderContext,
    ) -> Vec<Fragment> {
        let mut fragments = self.render_children(children, ctx);
        for run in runs_mut(&mut fragments) {
            run.annotations.insert(tag);
        }
        fragments
    }

    /// The enclosing link wins over any link set by nested content.
    fn link(&mut self, target: &str, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        let mut fragments = self.render_children(children, ctx);
        if !fragments.iter().any(Fragment::is_text) {
            // Empty link text: keep the target visible.
            fragments.push(Fragment::Text(RichText::plain(target)));
        }
        for run in runs_mut(&mut fragments) {
            run.link = Some(target.to_owned());
        }
        fragments
    }

    fn image(&mut self, src: &str, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        self.degrade(
            NodeKind::Image,
            "images are not supported; falling back to a plain-text link",
        );
        self.link(src, children, ctx)
    }

    /// Paragraph children become the item's own text, everything else
    /// (nested lists) becomes the item's children.
    fn list_item(&mut self, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        let kind = ctx.list_kind().unwrap_or(ListKind::Bulleted);
        let mut text = Vec::new();
        let mut nested = Vec::new();

        for fragment in self.render_children(children, ctx) {
            match fragment {
                Fragment::Block(block) if block.kind() == BlockKind::Paragraph => {
                    text.extend(block.into_text());
                }
                Fragment::Block(block) => nested.push(block),
                Fragment::Text(run) => text.push(run),
            }
        }

        vec![Fragment::Block(Block::list_item(kind, text, nested))]
    }

    fn quote(&mut self, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        self.degrade(
            NodeKind::Quote,
            "quotes are not supported; falling back to a paragraph block",
        );
        merge_paragraphs(self.render_children(children, ctx))
    }

    fn block_code(&mut self, children: &[SyntaxNode], ctx: RenderContext) -> Vec<Fragment> {
        self.degrade(
            NodeKind::BlockCode,
            "code blocks are not supported; falling back to a paragraph block",
        );
        self.paragraph(children, ctx)
    }

    fn degrade(&mut self, kind: NodeKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, message);
        debug!(kind = %diagnostic.kind, "{}", diagnostic.message);
        self.sink.report(diagnostic);
    }
}

fn runs_mut(fragments: &mut [Fragment]) -> impl Iterator<Item = &mut RichText> {
    fragments.iter_mut().filter_map(|fragment| match fragment {
        Fragment::Text(run) => Some(run),
        Fragment::Block(_) => None,
    })
}

/// Separate runs from blocks that surfaced in inline position.
fn split_runs(fragments: Vec<Fragment>) -> (Vec<RichText>, Vec<Block>) {
    let mut runs = Vec::with_capacity(fragments.len());
    let mut blocks = Vec::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(run) => runs.push(run),
            Fragment::Block(block) => blocks.push(block),
        }
    }
    (runs, blocks)
}

fn with_trailing_blocks(block: Block, trailing: Vec<Block>) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(1 + trailing.len());
    fragments.push(Fragment::Block(block));
    fragments.extend(trailing.into_iter().map(Fragment::Block));
    fragments
}

/// Fold consecutive paragraphs into one, separated by line breaks.
///
/// Non-paragraph blocks stay in place and split the run of paragraphs.
/// Always yields at least one paragraph.
fn merge_paragraphs(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut out = Vec::new();
    let mut text: Vec<RichText> = Vec::new();
    let mut open = false;

    for fragment in fragments {
        match fragment {
            Fragment::Block(block) if block.kind() == BlockKind::Paragraph => {
                if open {
                    text.push(RichText::plain("\n"));
                }
                text.extend(block.into_text());
                open = true;
            }
            Fragment::Text(run) => {
                text.push(run);
                open = true;
            }
            Fragment::Block(block) => {
                if open {
                    out.push(Fragment::Block(Block::paragraph(mem::take(&mut text))));
                    open = false;
                }
                out.push(Fragment::Block(block));
            }
        }
    }

    if open || out.is_empty() {
        out.push(Fragment::Block(Block::paragraph(text)));
    }
    out
}

/// Top-level fragments to blocks; consecutive runs share one paragraph.
fn blocks_from_fragments(fragments: Vec<Fragment>) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(fragments.len());
    let mut pending: Vec<RichText> = Vec::new();

    for fragment in fragments {
        match fragment {
            Fragment::Text(run) => pending.push(run),
            Fragment::Block(block) => {
                if !pending.is_empty() {
                    blocks.push(Block::paragraph(mem::take(&mut pending)));
                }
                blocks.push(block);
            }
        }
    }
    if !pending.is_empty() {
        blocks.push(Block::paragraph(pending));
    }
    blocks
}
