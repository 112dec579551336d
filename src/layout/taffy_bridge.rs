//! Taffy Bridge - flexbox layout of the landing page
//!
//! Builds a small Taffy tree for the page, runs layout against the terminal
//! width and reads back absolute rectangles:
//!
//! ```text
//! page (column)
//! ├── hero (column, full viewport, centred)
//! │   ├── title
//! │   ├── rotating line
//! │   └── buttons (row)
//! └── section × N
//! ```

use taffy::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto, NodeId, Rect as TaffyRect, Size, Style, TaffyTree,
};

use crate::error::{Error, Result};
use crate::types::Rect;

/// Horizontal padding inside a button, per side.
pub const BUTTON_PADDING: u16 = 2;
/// Button height (border, label, border).
pub const BUTTON_HEIGHT: u16 = 3;
/// Columns left free on each side of a section.
pub const SECTION_INSET: u16 = 4;
/// Rows between sections.
pub const SECTION_GAP: u16 = 2;

/// Measured sizes the layout needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInput {
    pub viewport_width: u16,
    pub viewport_height: u16,
    pub title_width: u16,
    /// Widest word plus the caret.
    pub rotating_width: u16,
    pub button_label_widths: Vec<u16>,
    pub section_heights: Vec<u16>,
}

/// Absolute rectangles, in page coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LandingLayout {
    pub hero: Rect,
    pub title: Rect,
    pub rotating: Rect,
    pub buttons: Vec<Rect>,
    pub sections: Vec<Rect>,
    pub page_height: u16,
}

fn cells(n: u16) -> Dimension {
    Dimension::Length(n as f32)
}

fn fixed(width: u16, height: u16) -> Style {
    Style {
        size: Size {
            width: cells(width),
            height: cells(height),
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn layout_err(e: taffy::TaffyError) -> Error {
    Error::Layout(e.to_string())
}

/// Compute the landing layout for the given terminal size.
pub fn compute_landing_layout(input: &LayoutInput) -> Result<LandingLayout> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let title = tree
        .new_leaf(fixed(input.title_width, 1))
        .map_err(layout_err)?;
    let rotating = tree
        .new_leaf(fixed(input.rotating_width, 1))
        .map_err(layout_err)?;

    let mut buttons = Vec::with_capacity(input.button_label_widths.len());
    for &label in &input.button_label_widths {
        let node = tree
            .new_leaf(fixed(label + BUTTON_PADDING * 2, BUTTON_HEIGHT))
            .map_err(layout_err)?;
        buttons.push(node);
    }
    let button_row = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                gap: Size {
                    width: LengthPercentage::Length(2.0),
                    height: LengthPercentage::Length(0.0),
                },
                ..Default::default()
            },
            &buttons,
        )
        .map_err(layout_err)?;

    let hero = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                justify_content: Some(JustifyContent::Center),
                align_items: Some(AlignItems::Center),
                gap: Size {
                    width: LengthPercentage::Length(0.0),
                    height: LengthPercentage::Length(1.0),
                },
                size: Size {
                    width: Dimension::Percent(1.0),
                    height: cells(input.viewport_height),
                },
                flex_shrink: 0.0,
                ..Default::default()
            },
            &[title, rotating, button_row],
        )
        .map_err(layout_err)?;

    let section_width = input.viewport_width.saturating_sub(SECTION_INSET * 2);
    let mut sections = Vec::with_capacity(input.section_heights.len());
    for &height in &input.section_heights {
        let node = tree
            .new_leaf(Style {
                margin: TaffyRect {
                    top: LengthPercentageAuto::Length(SECTION_GAP as f32),
                    right: LengthPercentageAuto::Length(0.0),
                    bottom: LengthPercentageAuto::Length(0.0),
                    left: LengthPercentageAuto::Length(0.0),
                },
                ..fixed(section_width, height)
            })
            .map_err(layout_err)?;
        sections.push(node);
    }

    let mut children = vec![hero];
    children.extend(&sections);
    let page = tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                align_items: Some(AlignItems::Center),
                size: Size {
                    width: cells(input.viewport_width),
                    height: Dimension::Auto,
                },
                padding: TaffyRect {
                    top: LengthPercentage::Length(0.0),
                    right: LengthPercentage::Length(0.0),
                    bottom: LengthPercentage::Length(SECTION_GAP as f32),
                    left: LengthPercentage::Length(0.0),
                },
                ..Default::default()
            },
            &children,
        )
        .map_err(layout_err)?;

    let available = Size {
        width: AvailableSpace::Definite(input.viewport_width as f32),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(page, available).map_err(layout_err)?;

    let origin = (0.0, 0.0);
    let hero_origin = offset_of(&tree, hero, origin)?;
    let row_origin = offset_of(&tree, button_row, hero_origin)?;

    Ok(LandingLayout {
        hero: rect_of(&tree, hero, origin)?,
        title: rect_of(&tree, title, hero_origin)?,
        rotating: rect_of(&tree, rotating, hero_origin)?,
        buttons: buttons
            .iter()
            .map(|&node| rect_of(&tree, node, row_origin))
            .collect::<Result<_>>()?,
        sections: sections
            .iter()
            .map(|&node| rect_of(&tree, node, origin))
            .collect::<Result<_>>()?,
        page_height: tree.layout(page).map_err(layout_err)?.size.height.round() as u16,
    })
}

/// Absolute origin of `node` given its parent's absolute origin.
fn offset_of(tree: &TaffyTree<()>, node: NodeId, parent: (f32, f32)) -> Result<(f32, f32)> {
    let layout = tree.layout(node).map_err(layout_err)?;
    Ok((parent.0 + layout.location.x, parent.1 + layout.location.y))
}

fn rect_of(tree: &TaffyTree<()>, node: NodeId, parent: (f32, f32)) -> Result<Rect> {
    let layout = tree.layout(node).map_err(layout_err)?;
    let (x, y) = (parent.0 + layout.location.x, parent.1 + layout.location.y);
    Ok(Rect::new(
        x.round().max(0.0) as u16,
        y.round().max(0.0) as u16,
        layout.size.width.round() as u16,
        layout.size.height.round() as u16,
    ))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> LayoutInput {
        LayoutInput {
            viewport_width: 80,
            viewport_height: 25,
            title_width: 20,
            rotating_width: 12,
            button_label_widths: vec![11, 9],
            section_heights: vec![6, 6],
        }
    }

    #[test]
    fn test_hero_fills_viewport() {
        let layout = compute_landing_layout(&input()).unwrap();
        assert_eq!(layout.hero, Rect::new(0, 0, 80, 25));
    }

    #[test]
    fn test_hero_content_centred() {
        let layout = compute_landing_layout(&input()).unwrap();
        // Content: 1 + 1 + 1 + 1 + 3 = 7 rows centred in 25
        assert_eq!(layout.title, Rect::new(30, 9, 20, 1));
        assert_eq!(layout.rotating, Rect::new(34, 11, 12, 1));

        // Buttons 15 + 2 + 13 = 30 wide, centred
        assert_eq!(layout.buttons.len(), 2);
        assert_eq!(layout.buttons[0].x, 25);
        assert_eq!(layout.buttons[0].y, 13);
        assert_eq!(layout.buttons[0].width, 15);
        assert_eq!(layout.buttons[1].x, layout.buttons[0].x + 17);
        assert_eq!(layout.buttons[0].height, BUTTON_HEIGHT);
    }

    #[test]
    fn test_sections_stack_below_hero() {
        let layout = compute_landing_layout(&input()).unwrap();
        assert_eq!(layout.sections[0], Rect::new(4, 27, 72, 6));
        assert_eq!(layout.sections[1], Rect::new(4, 35, 72, 6));
        assert_eq!(layout.page_height, 43);
    }

    #[test]
    fn test_no_sections() {
        let layout = compute_landing_layout(&LayoutInput {
            section_heights: Vec::new(),
            ..input()
        })
        .unwrap();
        assert!(layout.sections.is_empty());
        assert_eq!(layout.page_height, 27);
    }
}
