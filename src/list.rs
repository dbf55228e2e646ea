pub mod list {
    use std::fmt;
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ListError {
        #[error("节点存储空间分配失败")]
        AllocationFailed,
        #[error("头节点存在前驱: 槽位 {0}")]
        FirstHasPredecessor(usize),
        #[error("尾节点存在后继: 槽位 {0}")]
        LastHasSuccessor(usize),
        #[error("相邻节点链接不对称: 槽位 {from} -> 槽位 {to}")]
        AsymmetricLink { from: usize, to: usize },
        #[error("首尾指针状态不一致")]
        MismatchedEnds,
        #[error("沿 next 方向遍历未终止于尾节点")]
        UnterminatedChain,
        #[error("链表长度不一致: 记录 {recorded}，实际遍历 {walked}")]
        LengthMismatch { recorded: usize, walked: usize },
    }

    /// 节点句柄：槽位下标加代数标记
    ///
    /// 句柄本身不拥有节点。节点被移除后，旧句柄的代数与槽位当前代数
    /// 不再一致，此后所有查询都返回 `None`，不会读到复用该槽位的新节点。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeRef {
        index: usize,
        generation: u32,
    }

    impl NodeRef {
        /// 返回句柄指向的槽位下标
        pub fn index(self) -> usize {
            self.index
        }

        /// 返回句柄携带的代数标记
        pub fn generation(self) -> u32 {
            self.generation
        }
    }

    /// 链表节点：持有一份文本值以及指向邻居的非拥有链接
    #[derive(Debug)]
    struct Node {
        value: String,
        prev: Option<NodeRef>,
        next: Option<NodeRef>,
    }

    /// 槽位：节点的存储单元，记录当前代数
    #[derive(Debug)]
    struct Slot {
        generation: u32,
        node: Option<Node>,
    }

    /// 基于槽位仓储的文本双向链表
    ///
    /// 链表独占拥有全部节点。`prev`/`next` 是代数标记的槽位句柄而不是
    /// 指针，因此不存在所有权环；被移除节点的槽位提升代数后进入空闲表，
    /// 等待复用。
    ///
    /// # 不变量
    /// - 空链表: `first` 与 `last` 均为 `None`，长度为 0
    /// - 非空链表: `first` 没有前驱，`last` 没有后继，均持有值
    /// - 对任意相邻节点 A、B: `A.next == B` 当且仅当 `B.prev == A`
    /// - 从 `first` 沿 `next` 遍历恰好在 `last` 处终止，无环无分叉
    ///
    /// # 线程安全
    /// 本结构不支持多线程并发修改；跨线程使用必须由调用方加外部同步。
    pub struct DoublyLinkedList {
        slots: Vec<Slot>,
        free: Vec<usize>,
        first: Option<NodeRef>,
        last: Option<NodeRef>,
        len: usize,
    }

    // 基础实现
    impl DoublyLinkedList {
        /// 构造一个新的空双向链表
        ///
        /// # 返回值
        /// 返回一个初始化为空的 `DoublyLinkedList` 实例，其中：
        /// - `slots`: 节点存储仓，初始不占用堆内存
        /// - `free`: 可复用槽位的下标表，初始为空
        /// - `first` / `last`: 首尾句柄，初始均为 `None`
        /// - `len`: 链表长度，初始化为 0
        pub fn new() -> Self {
            DoublyLinkedList {
                slots: Vec::new(),
                free: Vec::new(),
                first: None,
                last: None,
                len: 0,
            }
        }

        /// 获取链表当前的元素数量
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 返回头节点句柄，链表为空时返回 `None`
        pub fn first(&self) -> Option<NodeRef> {
            self.first
        }

        /// 返回尾节点句柄，链表为空时返回 `None`
        pub fn last(&self) -> Option<NodeRef> {
            self.last
        }

        /// 按句柄解析存活节点，代数不匹配或槽位已空则返回 `None`
        fn node(&self, node_ref: NodeRef) -> Option<&Node> {
            self.slots
                .get(node_ref.index)
                .filter(|slot| slot.generation == node_ref.generation)
                .and_then(|slot| slot.node.as_ref())
        }

        fn node_mut(&mut self, node_ref: NodeRef) -> Option<&mut Node> {
            self.slots
                .get_mut(node_ref.index)
                .filter(|slot| slot.generation == node_ref.generation)
                .and_then(|slot| slot.node.as_mut())
        }

        /// 读取句柄指向节点的文本值
        ///
        /// # 返回值
        /// - 句柄存活时返回 `Some(&str)`
        /// - 句柄过期、越界或槽位已空时返回 `None`
        pub fn value(&self, node_ref: NodeRef) -> Option<&str> {
            self.node(node_ref).map(|node| node.value.as_str())
        }

        /// 返回句柄指向节点的后继句柄
        pub fn next_of(&self, node_ref: NodeRef) -> Option<NodeRef> {
            self.node(node_ref).and_then(|node| node.next)
        }

        /// 返回句柄指向节点的前驱句柄
        pub fn prev_of(&self, node_ref: NodeRef) -> Option<NodeRef> {
            self.node(node_ref).and_then(|node| node.prev)
        }
    }

    // 插入操作
    impl DoublyLinkedList {
        /// 分配一个持有给定值的新节点
        ///
        /// 优先复用空闲槽位；没有空闲槽位时扩展仓储。扩展失败不会中止
        /// 进程，而是报告 `AllocationFailed`。
        fn allocate(&mut self, value: String) -> Result<NodeRef, ListError> {
            let node = Node {
                value,
                prev: None,
                next: None,
            };

            match self.free.pop() {
                Some(index) => {
                    let slot = &mut self.slots[index];
                    slot.node = Some(node);
                    Ok(NodeRef {
                        index,
                        generation: slot.generation,
                    })
                }
                None => {
                    self.slots
                        .try_reserve(1)
                        .map_err(|_| ListError::AllocationFailed)?;
                    let index = self.slots.len();
                    self.slots.push(Slot {
                        generation: 0,
                        node: Some(node),
                    });
                    Ok(NodeRef {
                        index,
                        generation: 0,
                    })
                }
            }
        }

        /// 在两个节点之间建立对称链接：`prev.next = next` 且 `next.prev = prev`
        ///
        /// 只改写这两个节点的链接，不触碰其他节点。
        fn link_after(&mut self, prev_ref: NodeRef, next_ref: NodeRef) {
            if let Some(prev_node) = self.node_mut(prev_ref) {
                prev_node.next = Some(next_ref);
            }
            if let Some(next_node) = self.node_mut(next_ref) {
                next_node.prev = Some(prev_ref);
            }
        }

        /// 在链表尾部追加一个文本值
        ///
        /// # 参数
        /// - `text`: 要追加的文本，复制进节点自有的存储，与调用方缓冲区无关
        ///
        /// # 返回值
        /// - `Ok(NodeRef)`: 新追加节点的句柄
        /// - `Err(ListError::AllocationFailed)`: 值复制或仓储扩展的内存分配被拒绝
        ///
        /// # 操作逻辑
        /// 1. 将 `text` 复制进自有 `String`
        /// 2. 链表为空时，新节点同时成为 `first` 与 `last`
        /// 3. 否则将新节点对称链接到当前 `last` 之后，并更新 `last`
        /// 4. 长度加 1
        pub fn append_value(&mut self, text: &str) -> Result<NodeRef, ListError> {
            let mut value = String::new();
            value
                .try_reserve(text.len())
                .map_err(|_| ListError::AllocationFailed)?;
            value.push_str(text);

            let node_ref = self.allocate(value)?;
            match self.last {
                None => {
                    self.first = Some(node_ref);
                    self.last = Some(node_ref);
                }
                Some(last_ref) => {
                    self.link_after(last_ref, node_ref);
                    self.last = Some(node_ref);
                }
            }
            self.len += 1;
            Ok(node_ref)
        }
    }

    // 移除操作
    impl DoublyLinkedList {
        /// 将节点从链条中摘除，修补存活邻居的链接
        ///
        /// # 操作逻辑
        /// 1. 前驱存在时令 `prev.next = node.next`，否则 `first = node.next`
        /// 2. 后继存在时令 `next.prev = node.prev`，否则 `last = node.prev`
        /// 3. 清空被摘除节点自身的两个链接
        fn unlink(&mut self, node_ref: NodeRef) {
            let (prev, next) = match self.node(node_ref) {
                Some(node) => (node.prev, node.next),
                None => return,
            };

            match prev {
                Some(prev_ref) => {
                    if let Some(prev_node) = self.node_mut(prev_ref) {
                        prev_node.next = next;
                    }
                }
                None => self.first = next,
            }

            match next {
                Some(next_ref) => {
                    if let Some(next_node) = self.node_mut(next_ref) {
                        next_node.prev = prev;
                    }
                }
                None => self.last = prev,
            }

            if let Some(node) = self.node_mut(node_ref) {
                node.prev = None;
                node.next = None;
            }
        }

        /// 退役一个槽位：丢弃节点值，提升代数并放回空闲表
        fn retire(&mut self, node_ref: NodeRef) {
            if let Some(slot) = self
                .slots
                .get_mut(node_ref.index)
                .filter(|slot| slot.generation == node_ref.generation)
            {
                if slot.node.take().is_some() {
                    slot.generation = slot.generation.wrapping_add(1);
                    self.free.push(node_ref.index);
                }
            }
        }

        /// 移除并销毁当前尾节点
        ///
        /// # 返回值
        /// 返回剩余的尾节点句柄，永远不是被移除的节点：
        /// - 空链表: 什么也不移除，返回 `None`
        /// - 单元素链表: 销毁该节点，`first`/`last` 置空，返回 `None`
        /// - 多元素链表: 新 `last` 是被移除节点的前驱，返回 `Some(新 last)`
        pub fn remove_last(&mut self) -> Option<NodeRef> {
            let old_last = self.last?;
            self.unlink(old_last);
            self.retire(old_last);
            self.len -= 1;
            self.last
        }

        /// 反复移除尾节点直到链表为空
        ///
        /// 对空链表调用是无操作，可以重复调用。
        pub fn remove_all(&mut self) {
            while self.last.is_some() {
                self.remove_last();
            }
        }
    }

    // 查询操作
    impl DoublyLinkedList {
        /// 从头节点出发沿 `next` 走 `n` 步
        ///
        /// # 参数
        /// - `n`: 步数，`n == 0` 返回头节点
        ///
        /// # 返回值
        /// 返回到达的节点句柄；`n` 超出链表长度时返回 `None`
        pub fn nth_from_first(&self, n: usize) -> Option<NodeRef> {
            let mut walker = self.first;
            for _ in 0..n {
                walker = self.next_of(walker?);
            }
            walker
        }

        /// 从头节点开始线性查找第一个值恰好相等的节点
        ///
        /// # 返回值
        /// 返回下标最小的匹配节点句柄；没有匹配（包括空链表）时返回 `None`
        pub fn find_by_value(&self, text: &str) -> Option<NodeRef> {
            let mut walker = self.first;
            while let Some(node_ref) = walker {
                if self.value(node_ref) == Some(text) {
                    return Some(node_ref);
                }
                walker = self.next_of(node_ref);
            }
            None
        }
    }

    // 不变量校验
    impl DoublyLinkedList {
        /// 校验链表的全部结构不变量
        ///
        /// # 返回值
        /// - `Ok(())`: 所有不变量成立
        /// - `Err(ListError)`: 第一个被发现的违规
        ///
        /// # 校验内容
        /// 1. 空链表: `first`/`last` 均空且长度为 0
        /// 2. 非空链表: `first` 没有前驱，`last` 没有后继
        /// 3. 相邻节点的链接两两对称
        /// 4. 从 `first` 沿 `next` 遍历恰好终止于 `last`，步数与长度一致
        pub fn check_invariants(&self) -> Result<(), ListError> {
            let (first, last) = match (self.first, self.last) {
                (None, None) => {
                    return if self.len == 0 {
                        Ok(())
                    } else {
                        Err(ListError::LengthMismatch {
                            recorded: self.len,
                            walked: 0,
                        })
                    };
                }
                (Some(first), Some(last)) => (first, last),
                _ => return Err(ListError::MismatchedEnds),
            };

            let head = self.node(first).ok_or(ListError::MismatchedEnds)?;
            if head.prev.is_some() {
                return Err(ListError::FirstHasPredecessor(first.index));
            }
            let tail = self.node(last).ok_or(ListError::MismatchedEnds)?;
            if tail.next.is_some() {
                return Err(ListError::LastHasSuccessor(last.index));
            }

            let mut current = first;
            let mut walked = 1;
            while let Some(next_ref) = self.next_of(current) {
                let back = self
                    .node(next_ref)
                    .ok_or(ListError::UnterminatedChain)?
                    .prev;
                if back != Some(current) {
                    return Err(ListError::AsymmetricLink {
                        from: current.index,
                        to: next_ref.index,
                    });
                }
                walked += 1;
                // 环保护：步数超过记录长度说明链条成环
                if walked > self.len {
                    return Err(ListError::UnterminatedChain);
                }
                current = next_ref;
            }

            if current != last {
                return Err(ListError::UnterminatedChain);
            }
            if walked != self.len {
                return Err(ListError::LengthMismatch {
                    recorded: self.len,
                    walked,
                });
            }
            Ok(())
        }
    }

    // 格式化输出
    impl fmt::Debug for DoublyLinkedList {
        /// 从头到尾列出节点值，生成类似 `Vec` 的调试输出格式
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut list = f.debug_list();
            let mut walker = self.first;
            let mut steps = 0;
            while let Some(node_ref) = walker {
                if let Some(node) = self.node(node_ref) {
                    list.entry(&node.value);
                }
                // 链条损坏时避免无限遍历
                steps += 1;
                if steps > self.len {
                    break;
                }
                walker = self.next_of(node_ref);
            }
            list.finish()
        }
    }

    // 默认实现
    impl Default for DoublyLinkedList {
        fn default() -> Self {
            Self::new()
        }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        fn filled(values: &[&str]) -> DoublyLinkedList {
            let mut list = DoublyLinkedList::new();
            for value in values {
                list.append_value(value).unwrap();
            }
            list
        }

        // 空链表测试
        #[test]
        fn new_list_has_absent_ends() {
            let list = DoublyLinkedList::new();
            assert!(list.first().is_none());
            assert!(list.last().is_none());
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
            list.check_invariants().unwrap();
        }

        // 追加测试
        #[test]
        fn append_makes_single_node_both_ends() {
            let mut list = DoublyLinkedList::new();
            let node = list.append_value("one").unwrap();
            assert_eq!(list.first(), Some(node));
            assert_eq!(list.last(), Some(node));
            assert_eq!(list.value(node), Some("one"));
            assert!(list.prev_of(node).is_none());
            assert!(list.next_of(node).is_none());
            list.check_invariants().unwrap();
        }

        #[test]
        fn append_links_two_nodes_symmetrically() {
            let list = filled(&["one", "two"]);
            let first = list.first().unwrap();
            let last = list.last().unwrap();
            assert_eq!(list.next_of(first), Some(last));
            assert_eq!(list.prev_of(last), Some(first));
            assert_eq!(list.value(first), Some("one"));
            assert_eq!(list.value(last), Some("two"));
            list.check_invariants().unwrap();
        }

        // 索引访问测试
        #[test]
        fn nth_from_first_walks_in_append_order() {
            let values = ["one", "two", "three", "four"];
            let list = filled(&values);
            assert_eq!(list.nth_from_first(0), list.first());
            assert_eq!(list.nth_from_first(3), list.last());
            for (i, value) in values.iter().enumerate() {
                let node = list.nth_from_first(i).unwrap();
                assert_eq!(list.value(node), Some(*value));
            }
            assert!(list.nth_from_first(4).is_none());
            assert!(list.nth_from_first(100).is_none());
        }

        #[test]
        fn nth_on_empty_list_is_absent() {
            let list = DoublyLinkedList::new();
            assert!(list.nth_from_first(0).is_none());
        }

        // 查找测试
        #[test]
        fn find_returns_lowest_matching_index() {
            let list = filled(&["one", "two", "one"]);
            let hit = list.find_by_value("one").unwrap();
            assert_eq!(Some(hit), list.nth_from_first(0));
            assert_eq!(list.find_by_value("two"), list.nth_from_first(1));
        }

        #[test]
        fn find_misses_are_absent_not_errors() {
            let list = filled(&["one", "two"]);
            assert!(list.find_by_value("five").is_none());
            assert!(list.find_by_value("zero").is_none());
            let empty = DoublyLinkedList::new();
            assert!(empty.find_by_value("one").is_none());
        }

        // 移除测试
        #[test]
        fn remove_last_on_empty_is_noop() {
            let mut list = DoublyLinkedList::new();
            assert!(list.remove_last().is_none());
            assert!(list.is_empty());
            list.check_invariants().unwrap();
        }

        #[test]
        fn remove_last_returns_remaining_last() {
            let mut list = filled(&["one", "two", "three"]);
            let remaining = list.remove_last().unwrap();
            assert_eq!(list.value(remaining), Some("two"));
            assert_eq!(list.last(), Some(remaining));
            list.check_invariants().unwrap();

            let remaining = list.remove_last().unwrap();
            assert_eq!(list.value(remaining), Some("one"));
            assert_eq!(list.first(), list.last());
            list.check_invariants().unwrap();

            assert!(list.remove_last().is_none());
            assert!(list.first().is_none() && list.last().is_none());
            list.check_invariants().unwrap();
        }

        #[test]
        fn remove_last_rewires_surviving_neighbors() {
            // 摘除尾节点修补的是存活邻居的链接，而不是被摘除节点自身的链接
            let mut list = filled(&["one", "two", "three"]);
            let head = list.first().unwrap();
            let middle = list.nth_from_first(1).unwrap();

            list.remove_last();
            assert!(list.next_of(middle).is_none());
            assert_eq!(list.prev_of(middle), Some(head));
            assert_eq!(list.next_of(head), Some(middle));
            list.check_invariants().unwrap();
        }

        #[test]
        fn append_then_remove_round_trip_restores_empty() {
            let values = ["one", "two", "three", "four"];
            let mut list = filled(&values);
            for expected in ["three", "two", "one"] {
                let remaining = list.remove_last().unwrap();
                assert_eq!(list.value(remaining), Some(expected));
                list.check_invariants().unwrap();
            }
            assert!(list.remove_last().is_none());
            assert!(list.is_empty());
            list.check_invariants().unwrap();
        }

        #[test]
        fn remove_all_empties_and_is_idempotent() {
            let mut list = filled(&["one", "two", "three"]);
            list.remove_all();
            assert!(list.is_empty());
            list.check_invariants().unwrap();

            // 对空链表重复调用仍是无操作
            list.remove_all();
            assert!(list.is_empty());
            list.check_invariants().unwrap();
        }

        #[test]
        fn list_is_reusable_after_remove_all() {
            let mut list = filled(&["one", "two"]);
            list.remove_all();
            let node = list.append_value("three").unwrap();
            assert_eq!(list.first(), Some(node));
            assert_eq!(list.last(), Some(node));
            assert_eq!(list.value(node), Some("three"));
            list.check_invariants().unwrap();
        }

        // 句柄失效测试
        #[test]
        fn stale_ref_is_absent_after_removal() {
            let mut list = filled(&["one"]);
            let stale = list.append_value("two").unwrap();
            list.remove_last();
            assert!(list.value(stale).is_none());
            assert!(list.next_of(stale).is_none());
            assert!(list.prev_of(stale).is_none());
        }

        #[test]
        fn recycled_slot_does_not_resurrect_stale_ref() {
            let mut list = filled(&["one"]);
            let stale = list.append_value("two").unwrap();
            list.remove_last();

            // 新节点复用同一槽位，但代数不同
            let fresh = list.append_value("three").unwrap();
            assert_eq!(fresh.index(), stale.index());
            assert_ne!(fresh.generation(), stale.generation());
            assert!(list.value(stale).is_none());
            assert_eq!(list.value(fresh), Some("three"));
            list.check_invariants().unwrap();
        }

        #[test]
        fn foreign_ref_is_absent_in_other_list() {
            let mut owner = DoublyLinkedList::new();
            let node = owner.append_value("one").unwrap();
            let other = DoublyLinkedList::new();
            assert!(other.value(node).is_none());
        }

        // 不变量校验测试
        #[test]
        fn invariants_hold_across_mixed_mutations() {
            let mut list = DoublyLinkedList::new();
            for value in ["one", "two", "three", "four"] {
                list.append_value(value).unwrap();
                list.check_invariants().unwrap();
            }
            list.remove_last();
            list.check_invariants().unwrap();
            list.append_value("five").unwrap();
            list.check_invariants().unwrap();
            list.remove_all();
            list.check_invariants().unwrap();
        }

        #[test]
        fn check_invariants_detects_asymmetric_link() {
            let mut list = filled(&["one", "two", "three"]);
            let first = list.first().unwrap();

            // 手工破坏中间节点的回链
            let middle = list.nth_from_first(1).unwrap();
            let last = list.last().unwrap();
            list.node_mut(middle).unwrap().prev = Some(last);

            assert_eq!(
                list.check_invariants(),
                Err(ListError::AsymmetricLink {
                    from: first.index(),
                    to: middle.index(),
                })
            );
        }

        #[test]
        fn check_invariants_detects_length_mismatch() {
            let mut list = filled(&["one", "two"]);
            list.len = 3;
            assert_eq!(
                list.check_invariants(),
                Err(ListError::LengthMismatch {
                    recorded: 3,
                    walked: 2,
                })
            );
        }

        #[test]
        fn check_invariants_detects_mismatched_ends() {
            let mut list = filled(&["one"]);
            list.last = None;
            assert_eq!(list.check_invariants(), Err(ListError::MismatchedEnds));
        }

        // 值语义测试
        #[test]
        fn appended_value_is_an_independent_copy() {
            let mut list = DoublyLinkedList::new();
            let source = String::from("one");
            let node = list.append_value(&source).unwrap();
            drop(source);
            assert_eq!(list.value(node), Some("one"));
        }

        #[test]
        fn debug_output_lists_values_front_to_back() {
            let list = filled(&["one", "two"]);
            assert_eq!(format!("{:?}", list), r#"["one", "two"]"#);
        }
    }
}
