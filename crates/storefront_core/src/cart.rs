use shared::domain::{CartItem, Rupees};

/// Session cart: insertion ordered, one entry per product name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `quantity` units of `name` into the cart. An existing entry
    /// keeps its original unit price.
    pub fn add(&mut self, name: &str, unit_price: Rupees, quantity: u32) -> &CartItem {
        let quantity = quantity.max(1);
        let index = match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
                index
            }
            None => {
                self.items.push(CartItem {
                    name: name.to_string(),
                    unit_price,
                    quantity,
                });
                self.items.len() - 1
            }
        };
        &self.items[index]
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_merges_in_place() {
        let mut cart = Cart::new();
        cart.add("Ayurvedic Kit", Rupees(499), 1);
        cart.add("Herbal Tea", Rupees(199), 1);
        cart.add("Ayurvedic Kit", Rupees(499), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(
            cart.items()[0],
            CartItem {
                name: "Ayurvedic Kit".into(),
                unit_price: Rupees(499),
                quantity: 2,
            }
        );
        assert_eq!(cart.items()[1].name, "Herbal Tea");
    }

    #[test]
    fn zero_quantity_still_counts_as_one() {
        let mut cart = Cart::new();
        let item = cart.add("Neem Soap", Rupees(89), 0);
        assert_eq!(item.quantity, 1);
    }
}
