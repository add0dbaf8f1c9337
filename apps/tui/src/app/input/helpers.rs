pub const fn step_up(index: usize, amount: usize) -> usize {
    index.saturating_sub(amount)
}

pub const fn step_down(index: usize, amount: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let next = index.saturating_add(amount);
    if next >= len {
        len - 1
    } else {
        next
    }
}

pub fn is_text_char(c: char) -> bool {
    !c.is_control()
}
