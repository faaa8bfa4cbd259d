//! Category catalog and the chip-selection state of the new-entry form.
//!
//! Categories are static configuration: a stable id, a display name and a
//! pictogram, grouped by transaction direction. Behaviour (the fuel category
//! asking for extra inputs) hangs off a capability flag on the definition,
//! never off the display name, so renaming a chip cannot change what it does.

/// Whether money comes in or goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Income,
    Expense,
}

impl Direction {
    /// Wire key the backend uses for this direction (`tipo` form field,
    /// chart series names).
    pub fn as_key(self) -> &'static str {
        match self {
            Direction::Income => "entrada",
            Direction::Expense => "saida",
        }
    }

    /// Label shown on the direction toggle.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Income => "Entrada",
            Direction::Expense => "Saída",
        }
    }
}

/// Stable identity of a catalog entry, independent of its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryId {
    IFood,
    MotoUber,
    NinetyNineMoto,
    PrivateDelivery,
    Fuel,
    Maintenance,
    Lunch,
    Internet,
    TrafficFine,
}

/// Pictogram identifier; the view layer maps it to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Burger,
    Motorcycle,
    Helmet,
    Package,
    FuelPump,
    Wrench,
    Cutlery,
    Phone,
    Invoice,
}

#[derive(Debug)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: Icon,
    /// Choosing this chip reveals the fuel input group (litres, odometer).
    pub fuel_details: bool,
}

const INCOME_CATALOG: &[Category] = &[
    Category {
        id: CategoryId::IFood,
        name: "iFood",
        icon: Icon::Burger,
        fuel_details: false,
    },
    Category {
        id: CategoryId::MotoUber,
        name: "Moto Uber",
        icon: Icon::Motorcycle,
        fuel_details: false,
    },
    Category {
        id: CategoryId::NinetyNineMoto,
        name: "99 Moto",
        icon: Icon::Helmet,
        fuel_details: false,
    },
    Category {
        id: CategoryId::PrivateDelivery,
        name: "Entrega Part.",
        icon: Icon::Package,
        fuel_details: false,
    },
];

const EXPENSE_CATALOG: &[Category] = &[
    Category {
        id: CategoryId::Fuel,
        name: "Gasolina",
        icon: Icon::FuelPump,
        fuel_details: true,
    },
    Category {
        id: CategoryId::Maintenance,
        name: "Manutenção",
        icon: Icon::Wrench,
        fuel_details: false,
    },
    Category {
        id: CategoryId::Lunch,
        name: "Almoço",
        icon: Icon::Cutlery,
        fuel_details: false,
    },
    Category {
        id: CategoryId::Internet,
        name: "Internet",
        icon: Icon::Phone,
        fuel_details: false,
    },
    Category {
        id: CategoryId::TrafficFine,
        name: "Multa",
        icon: Icon::Invoice,
        fuel_details: false,
    },
];

/// The chip set for one direction, in configuration order. An empty slice
/// simply renders no chips.
pub fn catalog(direction: Direction) -> &'static [Category] {
    match direction {
        Direction::Income => INCOME_CATALOG,
        Direction::Expense => EXPENSE_CATALOG,
    }
}

/// Chip-selection state while the entry form is open.
///
/// At most one chip is active. Switching direction always resets the
/// selection, even to the same direction, so the form never carries a chip
/// that the visible catalog does not contain.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    direction: Direction,
    selected: Option<CategoryId>,
}

impl Selection {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            selected: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Switches direction and drops any active chip.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.selected = None;
    }

    /// Activates `id` and returns its catalog entry so the caller can derive
    /// the description text. An id outside the current direction's catalog
    /// leaves the selection untouched.
    pub fn choose(&mut self, id: CategoryId) -> Option<&'static Category> {
        let found = catalog(self.direction).iter().find(|c| c.id == id)?;
        self.selected = Some(id);
        Some(found)
    }

    pub fn selected(&self) -> Option<CategoryId> {
        self.selected
    }

    pub fn is_active(&self, id: CategoryId) -> bool {
        self.selected == Some(id)
    }

    /// The fuel input group follows the capability flag of the active chip.
    pub fn fuel_fields_visible(&self) -> bool {
        self.selected
            .and_then(|id| catalog(self.direction).iter().find(|c| c.id == id))
            .is_some_and(|c| c.fuel_details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_keep_configuration_order() {
        let income: Vec<&str> = catalog(Direction::Income).iter().map(|c| c.name).collect();
        assert_eq!(income, ["iFood", "Moto Uber", "99 Moto", "Entrega Part."]);

        let expense: Vec<&str> = catalog(Direction::Expense)
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            expense,
            ["Gasolina", "Manutenção", "Almoço", "Internet", "Multa"]
        );
    }

    #[test]
    fn wire_keys_match_backend() {
        assert_eq!(Direction::Income.as_key(), "entrada");
        assert_eq!(Direction::Expense.as_key(), "saida");
    }

    #[test]
    fn fresh_selection_has_no_active_chip() {
        let selection = Selection::new(Direction::Expense);
        assert_eq!(selection.selected(), None);
        for category in catalog(Direction::Expense) {
            assert!(!selection.is_active(category.id));
        }
        assert!(!selection.fuel_fields_visible());
    }

    #[test]
    fn last_click_wins() {
        let mut selection = Selection::new(Direction::Expense);

        let first = selection.choose(CategoryId::Lunch).map(|c| c.name);
        assert_eq!(first, Some("Almoço"));

        let second = selection.choose(CategoryId::Fuel).map(|c| c.name);
        assert_eq!(second, Some("Gasolina"));

        assert!(selection.is_active(CategoryId::Fuel));
        assert!(!selection.is_active(CategoryId::Lunch));
    }

    #[test]
    fn only_the_fuel_chip_reveals_extra_fields() {
        let mut selection = Selection::new(Direction::Expense);

        selection.choose(CategoryId::Fuel);
        assert!(selection.fuel_fields_visible());

        selection.choose(CategoryId::Maintenance);
        assert!(!selection.fuel_fields_visible());

        for category in catalog(Direction::Income)
            .iter()
            .chain(catalog(Direction::Expense))
        {
            assert_eq!(category.fuel_details, category.id == CategoryId::Fuel);
        }
    }

    #[test]
    fn direction_switch_always_resets() {
        let mut selection = Selection::new(Direction::Expense);
        selection.choose(CategoryId::Fuel);

        selection.set_direction(Direction::Income);
        assert_eq!(selection.selected(), None);
        assert!(!selection.fuel_fields_visible());

        // Re-selecting the same direction is also a reset.
        selection.choose(CategoryId::MotoUber);
        selection.set_direction(Direction::Income);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn choosing_outside_the_catalog_is_a_noop() {
        let mut selection = Selection::new(Direction::Income);
        assert!(selection.choose(CategoryId::Fuel).is_none());
        assert_eq!(selection.selected(), None);
    }
}
