use crate::OperationCost;

/// A value paired with the hashing work spent producing it.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// The produced value.
    pub value: T,
    /// Hashing work behind `value`.
    pub cost: OperationCost,
}

impl<T> CostContext<T> {
    /// Move the cost into `acc_cost` and return the value.
    pub fn unwrap_add_cost(self, acc_cost: &mut OperationCost) -> T {
        *acc_cost += self.cost;
        self.value
    }

    /// Return the value, forgetting how many hashes it took.
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Hashing work recorded so far.
    pub fn cost(&self) -> &OperationCost {
        &self.cost
    }

    /// The produced value, by reference.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Charge work done before this value was produced, e.g. hashing the
    /// children of a node.
    pub fn add_cost(mut self, cost: OperationCost) -> Self {
        self.cost += cost;
        self
    }
}

/// Attaches hashing cost to any value.
pub trait CostsExt {
    /// Pair `self` with `cost`.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self>
    where
        Self: Sized,
    {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}
