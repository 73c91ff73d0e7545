use crate::{
    grid::{GridRectangle, Selection},
    planet::Planet,
};
use log::debug;
use nalgebra::Vector3;

/// Interactive state for drawing a selection with a cursor. The first confirm
/// drops an anchor at the cursor, and from then on every update selects the
/// rectangle between the anchor and the cursor. The second confirm hands back
/// the final selection and resets the tool.
///
/// The tool doesn't read input or render anything. The caller feeds it the
/// cursor position on the planet's surface (relative to the planet's center)
/// once per frame, and decides what to do with the selections it produces.
#[derive(Clone, Debug)]
pub struct SelectionTool<P: Planet> {
    anchor: Option<Vector3<f32>>,
    use_shortest_path: bool,
    rect: GridRectangle<P>,
}

/// Outcome of confirming at the cursor
#[derive(Clone, Debug, PartialEq)]
pub enum ToolAction {
    /// The selection's first corner was placed
    Anchored,
    /// The selection is complete, and should be applied
    Apply(Selection),
}

impl<P: Planet> SelectionTool<P> {
    pub fn new() -> Self {
        Self {
            anchor: None,
            use_shortest_path: true,
            rect: GridRectangle::new(),
        }
    }

    /// The first corner of the selection, if it's been placed
    pub fn anchor(&self) -> Option<Vector3<f32>> {
        self.anchor
    }

    pub fn use_shortest_path(&self) -> bool {
        self.use_shortest_path
    }

    /// Switch between the shorter and the longer way around the planet
    pub fn toggle_path(&mut self) {
        self.use_shortest_path = !self.use_shortest_path;
    }

    /// Drop the anchor and go back to the default path
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.use_shortest_path = true;
    }

    /// Recalculate the selection for the current cursor position. Without an
    /// anchor, this is just the tile under the cursor.
    pub fn update(
        &mut self,
        planet: P,
        cursor: &Vector3<f32>,
    ) -> anyhow::Result<Selection> {
        match self.anchor {
            Some(anchor) => self.rect.calculate(
                planet,
                &anchor,
                cursor,
                self.use_shortest_path,
            ),
            None => self.rect.calculate(planet, cursor, cursor, true),
        }
        self.rect.export()
    }

    /// Confirm at the cursor position. Places the anchor if there isn't one
    /// yet, otherwise finishes the selection and resets the tool.
    pub fn confirm(
        &mut self,
        planet: P,
        cursor: &Vector3<f32>,
    ) -> anyhow::Result<ToolAction> {
        if self.anchor.is_none() {
            debug!("Anchored selection at {:?}", cursor);
            self.anchor = Some(*cursor);
            return Ok(ToolAction::Anchored);
        }

        let selection = self.update(planet, cursor)?;
        self.cancel();
        Ok(ToolAction::Apply(selection))
    }

    /// Short description of what the tool is doing, for display next to the
    /// cursor
    pub fn status(&self, selection: &Selection) -> String {
        if self.anchor.is_some() {
            let area = selection.indices.iter().filter(|i| **i >= 0).count();
            format!("Selected area: {}", area)
        } else {
            "Select starting point".into()
        }
    }
}

impl<P: Planet> Default for SelectionTool<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::{GridRow, GridTile},
        planet::reference::PlanetModel,
        PlanetConfig,
    };

    fn point(planet: &PlanetModel, latitude: i32, longitude: i32) -> Vector3<f32> {
        let row = GridRow::from_latitude_element(planet.grid(), latitude);
        GridTile::from_longitude_element(row, longitude).position()
    }

    #[test]
    fn test_hover_without_anchor() {
        let planet = PlanetModel::new(PlanetConfig::default()).unwrap();
        let mut tool = SelectionTool::new();
        let selection = tool.update(&planet, &point(&planet, 20, 20)).unwrap();
        assert_eq!(selection.indices.len(), 1);
        assert_eq!(tool.status(&selection), "Select starting point");
    }

    #[test]
    fn test_draw_selection() {
        let planet = PlanetModel::new(PlanetConfig::default()).unwrap();
        let mut tool = SelectionTool::new();
        let start = point(&planet, 20, 20);
        let end = point(&planet, 22, 24);

        assert_eq!(tool.confirm(&planet, &start).unwrap(), ToolAction::Anchored);
        assert_eq!(tool.anchor(), Some(start));

        let selection = tool.update(&planet, &end).unwrap();
        // 3 rows of 5 tiles
        assert_eq!(selection.indices.len(), 15);
        assert_eq!(tool.status(&selection), "Selected area: 15");

        tool.toggle_path();
        assert!(!tool.use_shortest_path());
        let long_way = tool.update(&planet, &end).unwrap();
        assert!(long_way.indices.len() > selection.indices.len());

        match tool.confirm(&planet, &end).unwrap() {
            ToolAction::Apply(applied) => assert_eq!(applied, long_way),
            action => panic!("expected selection to apply, got {:?}", action),
        }
        assert_eq!(tool.anchor(), None);
        assert!(tool.use_shortest_path());
    }

    #[test]
    fn test_cancel() {
        let planet = PlanetModel::new(PlanetConfig::default()).unwrap();
        let mut tool = SelectionTool::new();
        tool.confirm(&planet, &point(&planet, 20, 20)).unwrap();
        tool.toggle_path();
        tool.cancel();
        assert_eq!(tool.anchor(), None);
        assert!(tool.use_shortest_path());
    }
}
